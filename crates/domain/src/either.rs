//! Success/failure vocabulary over `Result`.
//!
//! Every fallible operation in the workspace returns `Result<S, F>`: `Err` is
//! the failure arm, `Ok` the success arm. Callers short-circuit with `?` and
//! the failure travels upward unchanged. This trait only adds the two-armed
//! query names used across handlers and tests.

/// Arm queries for any `Result`.
pub trait EitherExt<S, F> {
    /// `true` when the failure arm is populated.
    fn is_failure(&self) -> bool;

    /// `true` when the success arm is populated.
    fn is_success(&self) -> bool;

    /// Borrow the failure value, if this is the failure arm.
    fn failure(&self) -> Option<&F>;

    /// Borrow the success value, if this is the success arm.
    fn success(&self) -> Option<&S>;
}

impl<S, F> EitherExt<S, F> for Result<S, F> {
    fn is_failure(&self) -> bool {
        self.is_err()
    }

    fn is_success(&self) -> bool {
        self.is_ok()
    }

    fn failure(&self) -> Option<&F> {
        self.as_ref().err()
    }

    fn success(&self) -> Option<&S> {
        self.as_ref().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arms_are_mutually_exclusive() {
        let ok: Result<u8, &str> = Ok(1);
        let err: Result<u8, &str> = Err("boom");

        assert!(ok.is_success() && !ok.is_failure());
        assert!(err.is_failure() && !err.is_success());
    }

    #[test]
    fn accessors_expose_the_populated_arm() {
        let ok: Result<u8, &str> = Ok(7);
        let err: Result<u8, &str> = Err("boom");

        assert_eq!(ok.success(), Some(&7));
        assert_eq!(ok.failure(), None);
        assert_eq!(err.failure(), Some(&"boom"));
        assert_eq!(err.success(), None);
    }
}
