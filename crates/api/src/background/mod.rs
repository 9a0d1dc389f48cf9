//! Background tasks.
//!
//! Each submodule provides a long-running async function meant for
//! `tokio::spawn`; all of them stop when their [`CancellationToken`] fires.
//!
//! [`CancellationToken`]: tokio_util::sync::CancellationToken

pub mod session_cleanup;
