#![doc = include_str!("../../../README.md")]

mod args;
mod build;
mod error;
mod options;
mod populate;
mod record;
mod signature;
mod target;
mod validate;
mod value;

pub use crate::{
    args::ArgumentSet,
    build::{BuildRequest, RESOLVE_OBJECT_PATH, builds, just},
    error::{BuildError, BuildResult},
    options::{BuildOptions, Convert},
    record::ConfigRecord,
    signature::{Param, ParamKind, Signature},
    target::Target,
    value::Value,
};
