use {
    crate::prelude::*,
    colored::ColoredString,
    std::{
        sync::{atomic::AtomicU8, Arc},
        thread,
    },
};

/// Print a grey colored line to separate sections
pub(crate) fn separator() -> ColoredString {
    "\n-=-=-=-=-=-=-=-".truecolor(100, 100, 100)
}

/// Print the title of the currently executed command.
#[macro_export]
macro_rules! command_title {
    ($($args:tt)*) => {
        if !JSON_MODE.load(Ordering::Relaxed) {
            println!(
                "\n{arrow} {title}{separator}",
                arrow = "▶".bold().purple(),
                title = format!($($args)*).bold(),
                separator = $crate::display::separator()
            );
        }
    };
}

/// Notify the user of a successful operation. Basically [`println!`] but
/// includes a not [`JSON_MODE`] check and some success formatting.
#[macro_export]
macro_rules! notify_success {
    ($($args:tt)*) => {
        if !JSON_MODE.load(Ordering::Relaxed) {
            println!(
                "[{check}] {msg}",
                check = "✔".green().bold(),
                msg = format!($($args)*)
            );
        }
    };
}

/// Similar to [`notify_success!`] but for errors.
#[macro_export]
macro_rules! notify_error {
    ($($args:tt)*) => {
        if !JSON_MODE.load(Ordering::Relaxed) {
            eprintln!(
                "[{ballot}] {msg}",
                ballot = "✘".red().bold(),
                msg = format!($($args)*)
            );
        }
    };
}

/// Non-blocking warnings, e.g. placeholder credentials.
#[macro_export]
macro_rules! notify_warning {
    ($($args:tt)*) => {
        if !JSON_MODE.load(Ordering::Relaxed) {
            println!(
                "[{warning}] {msg}",
                warning = "⚠".yellow().bold(),
                msg = format!($($args)*)
            );
        }
    };
}

/// Formatted list item.
#[macro_export]
macro_rules! item {
    ($($args:tt)*) => {
        if !JSON_MODE.load(Ordering::Relaxed) {
            println!(
                "    {arrow} {item}",
                arrow = "▶".truecolor(100, 100, 100),
                item = format!($($args)*)
            );
        }
    };
}

/// Macro to print a loading state. Accepts a message with format arguments
/// and returns a handle whose `success` and `error` methods settle the final
/// state of the line.
#[macro_export]
macro_rules! loading {
    ($($args:tt)*) => {{
        use std::{
            io::Write,
            sync::{atomic::AtomicU8, Arc},
            thread,
        };

        // Render the message up front so the spinner thread does not borrow
        // from the caller.
        let msg = format!($($args)*);
        let state = Arc::new(AtomicU8::new($crate::display::LOADING_RUNNING));

        let thread = {
            let state = state.clone();
            let msg = msg.clone();

            thread::spawn(move || {
                let frames = ["/", "-", "\\", "|"];

                let mut i = 0;

                while !JSON_MODE.load(Ordering::Relaxed) {
                    match state.load(Ordering::Relaxed) {
                        $crate::display::LOADING_SUCCESS => {
                            println!(
                                "\r[{check}] {msg}",
                                check = "✔".green().bold()
                            );

                            break;
                        }
                        $crate::display::LOADING_ERROR => {
                            println!(
                                "\r[{ballot}] {msg}",
                                ballot = "✘".red().bold()
                            );

                            break;
                        }
                        _ => (),
                    }

                    print!("\r[{}] {msg} ", frames[i].purple());

                    i = (i + 1) % frames.len();

                    std::io::stdout().flush().unwrap();

                    thread::sleep(std::time::Duration::from_millis(100));
                }
            })
        };

        $crate::display::LoadingHandle::new(state, thread)
    }};
}

pub(crate) const LOADING_RUNNING: u8 = 0;
pub(crate) const LOADING_SUCCESS: u8 = 1;
pub(crate) const LOADING_ERROR: u8 = 2;

/// Struct helping with handling loading state.
pub(crate) struct LoadingHandle {
    state: Arc<AtomicU8>,
    thread: thread::JoinHandle<()>,
}

impl LoadingHandle {
    pub(crate) fn new(state: Arc<AtomicU8>, thread: thread::JoinHandle<()>) -> Self {
        Self { state, thread }
    }

    /// Mark the loading as successful.
    pub(crate) fn success(self) {
        self.settle(LOADING_SUCCESS);
    }

    /// Mark the loading as errored.
    pub(crate) fn error(self) {
        self.settle(LOADING_ERROR);
    }

    fn settle(self, outcome: u8) {
        if !JSON_MODE.load(Ordering::Relaxed) {
            self.state.store(outcome, Ordering::Relaxed);

            self.thread.join().unwrap();
        }
    }
}

/// If [`JSON_MODE`] is enabled, output the given data as JSON.
pub(crate) fn json_output<T: Serialize>(data: &T) -> AnyResult<(), WoomcpCliError> {
    if !JSON_MODE.load(Ordering::Relaxed) {
        return Ok(());
    }

    match serde_json::to_string_pretty(data) {
        Ok(json) => {
            println!("{}", json);

            Ok(())
        }
        Err(e) => Err(WoomcpCliError::Any(e.into())),
    }
}
