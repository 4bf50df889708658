//! # versync-python
//!
//! Python package initializer support for versync. Rewrites every
//! `__version__ = "..."` assignment in `__init__.py`; when the file does not
//! exist yet it is created, parent directories included.

pub mod init_file;

pub use init_file::PythonInitFile;
