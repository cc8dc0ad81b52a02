mod calculator;
mod greeting;
mod health_check;
mod help;
mod invalid_url;

// re-export
pub use calculator::*;
pub use greeting::*;
pub use health_check::*;
pub use help::*;
pub use invalid_url::*;

// walk the `source` chain so the log shows every cause, not just the top one
pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
