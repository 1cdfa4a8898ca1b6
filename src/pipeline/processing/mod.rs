// Pipeline processing: raw tables into normalized records

pub mod normalize;
