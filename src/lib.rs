//! POSIX-style path manipulation for environments without a native
//! filesystem.
//!
//! Hosts such as browser-embedded runtimes have no working directory and
//! no path API; what they do have is a document location. This crate
//! provides the usual slash-path operations as pure string functions and
//! derives a virtual working directory from an injected location source.
//!
//! # Examples
//!
//! ```
//! assert_eq!(vpath::normalize("/a/b/../c"), "/a/c");
//! assert_eq!(vpath::join(["a/", "b", "../c"]).unwrap(), "a/c");
//! assert_eq!(vpath::dirname("/a/b.txt"), "/a");
//! assert_eq!(vpath::basename("/a/b.txt", None), "b.txt");
//! assert_eq!(vpath::extname("/a/b.txt"), ".txt");
//! assert_eq!(vpath::relative("/a/b/c", "/a/d"), "../../d");
//! ```
//!
//! Deriving the working directory from a document location:
//!
//! ```
//! assert_eq!(
//!     vpath::current_dir_at("https://example.com/app/index.html"),
//!     "/app"
//! );
//! ```

mod error;
mod location;
mod ops;
mod segments;
mod split;

pub use error::PathError;
pub use location::{
    LocationSource, clear_location_source, current_dir, current_dir_at, extract_path,
    set_location_source,
};
pub use ops::{
    PathArg, SEP, basename, dirname, extname, is_absolute, join, normalize, relative, resolve,
};
pub use split::{SplitPath, split};
