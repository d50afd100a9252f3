mod tool_list;
mod tool_search;

pub(crate) use {tool_list::*, tool_search::*};
