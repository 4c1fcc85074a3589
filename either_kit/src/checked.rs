use crate::{either::Either, error::InvalidArgument};

/// Operations that take their functions as `Option`s and report a missing one.
///
/// `try_case` and `try_inspect` only require the function for the active
/// variant. `try_map` and `try_bind` require the transform on both variants,
/// even though a `Left` never calls it.
pub trait Checked<L, R>: Sized {
    fn try_case<U, FL, FR>(self, of_left: Option<FL>, of_right: Option<FR>) -> Result<U, InvalidArgument>
    where
        FL: FnOnce(L) -> U,
        FR: FnOnce(R) -> U;

    fn try_inspect<FL, FR>(&self, of_left: Option<FL>, of_right: Option<FR>) -> Result<(), InvalidArgument>
    where
        FL: FnOnce(&L),
        FR: FnOnce(&R);

    fn try_map<U, F>(self, transform: Option<F>) -> Result<Either<L, U>, InvalidArgument>
    where
        F: FnOnce(R) -> U;

    fn try_bind<U, F>(self, transform: Option<F>) -> Result<Either<L, U>, InvalidArgument>
    where
        F: FnOnce(R) -> Either<L, U>;
}

fn require<F>(function: Option<F>, argument: &'static str) -> Result<F, InvalidArgument> {
    function.ok_or_else(|| {
        debug!("rejected call, `{}` is missing", argument);
        InvalidArgument::missing(argument)
    })
}

impl<L, R> Checked<L, R> for Either<L, R> {
    fn try_case<U, FL, FR>(self, of_left: Option<FL>, of_right: Option<FR>) -> Result<U, InvalidArgument>
    where
        FL: FnOnce(L) -> U,
        FR: FnOnce(R) -> U,
    {
        match self {
            Either::Left(value) => Ok(require(of_left, "of_left")?(value)),
            Either::Right(value) => Ok(require(of_right, "of_right")?(value)),
        }
    }

    fn try_inspect<FL, FR>(&self, of_left: Option<FL>, of_right: Option<FR>) -> Result<(), InvalidArgument>
    where
        FL: FnOnce(&L),
        FR: FnOnce(&R),
    {
        match self {
            Either::Left(value) => require(of_left, "of_left")?(value),
            Either::Right(value) => require(of_right, "of_right")?(value),
        }
        Ok(())
    }

    fn try_map<U, F>(self, transform: Option<F>) -> Result<Either<L, U>, InvalidArgument>
    where
        F: FnOnce(R) -> U,
    {
        let transform = require(transform, "transform")?;
        Ok(self.map(transform))
    }

    fn try_bind<U, F>(self, transform: Option<F>) -> Result<Either<L, U>, InvalidArgument>
    where
        F: FnOnce(R) -> Either<L, U>,
    {
        let transform = require(transform, "transform")?;
        Ok(self.bind(transform))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::either::{left, right};

    type Ident = fn(i32) -> i32;

    #[test]
    fn case_only_checks_the_active_branch() {
        let on_left: Either<i32, i32> = left(1);
        let on_right: Either<i32, i32> = right(2);

        assert_eq!(
            on_left.try_case(None::<Ident>, Some(|r| r)),
            Err(InvalidArgument::missing("of_left"))
        );
        assert_eq!(on_left.try_case(Some(|l| l), None::<Ident>), Ok(1));

        assert_eq!(
            on_right.try_case(Some(|l| l), None::<Ident>),
            Err(InvalidArgument::missing("of_right"))
        );
        assert_eq!(on_right.try_case(None::<Ident>, Some(|r| r)), Ok(2));
    }

    #[test]
    fn inspect_only_checks_the_active_branch() {
        let hits = Cell::new(0);
        let on_right: Either<&str, u8> = right(3);

        assert!(on_right
            .try_inspect(None::<fn(&&str)>, Some(|_: &u8| hits.set(hits.get() + 1)))
            .is_ok());
        assert_eq!(hits.get(), 1);

        let error = on_right.try_inspect(Some(|_: &&str| ()), None::<fn(&u8)>);
        assert_eq!(error.map_err(|e| e.argument()), Err("of_right"));
    }

    #[test]
    fn map_rejects_missing_transform_on_both_variants() {
        let on_left: Either<&str, i32> = left("err");
        let on_right: Either<&str, i32> = right(4);

        assert_eq!(on_left.try_map(None::<Ident>), Err(InvalidArgument::missing("transform")));
        assert_eq!(on_right.try_map(None::<Ident>), Err(InvalidArgument::missing("transform")));
        assert_eq!(on_right.try_map(Some(|n: i32| n + 1)), Ok(right(5)));
    }

    #[test]
    fn bind_rejects_missing_transform_on_both_variants() {
        type Step = fn(i32) -> Either<&'static str, i32>;
        let on_left: Either<&str, i32> = left("err");
        let on_right: Either<&str, i32> = right(4);

        assert_eq!(on_left.try_bind(None::<Step>), Err(InvalidArgument::missing("transform")));
        assert_eq!(on_right.try_bind(None::<Step>), Err(InvalidArgument::missing("transform")));
        assert_eq!(on_left.try_bind(Some(|n: i32| right(n * 2))), Ok(left("err")));
    }

    #[test]
    fn present_transform_on_left_is_never_called() {
        let calls = Cell::new(0);
        let mapped = left::<&str, i32>("err").try_map(Some(|n: i32| {
            calls.set(calls.get() + 1);
            n
        }));

        assert_eq!(mapped, Ok(left("err")));
        assert_eq!(calls.get(), 0);
    }
}
