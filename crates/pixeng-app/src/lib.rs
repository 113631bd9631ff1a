//! Sample clients for the pixeng engine, shared by the launcher and the
//! screenshot tool.

pub mod samples;
