//! Request/response correlation.
//!
//! Responses cross an asynchronous boundary and calls may be issued
//! concurrently, so the echoed identifier is the only thing binding a
//! response to the request that produced it.

use tracing::{debug, warn};

use skyframe_core::{Error, Ident, Result};

/// A fresh identifier for one logical call.
pub fn new_ident() -> Ident {
    let ident = Ident::generate();
    debug!(%ident, "New correlation ident");
    ident
}

/// Fail with [`Error::OutOfOrder`] unless `received` is exactly `expected`.
pub fn check_ident(expected: &Ident, received: &str) -> Result<()> {
    if expected == received {
        Ok(())
    } else {
        warn!(%expected, received, "Response ident mismatch");
        Err(Error::OutOfOrder {
            expected: expected.to_string(),
            received: received.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_ident_passes() {
        let ident = new_ident();
        let echoed = ident.as_str().to_string();
        assert!(check_ident(&ident, &echoed).is_ok());
    }

    #[test]
    fn mismatch_names_both_values() {
        let err = check_ident(&Ident::from("A"), "B").unwrap_err();
        match err {
            Error::OutOfOrder { expected, received } => {
                assert_eq!(expected, "A");
                assert_eq!(received, "B");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn comparison_is_exact() {
        let ident = Ident::from("abc");
        assert!(check_ident(&ident, "ABC").is_err());
        assert!(check_ident(&ident, "abc ").is_err());
    }
}
