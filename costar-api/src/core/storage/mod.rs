pub mod arc_str;
pub mod dict_mapper;
