/// A value that is exactly one of two things.
///
/// `Right` is the primary channel: [`Either::map`] and [`Either::bind`] act on
/// it and carry a `Left` through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

pub fn left<L, R>(value: L) -> Either<L, R> {
    Either::Left(value)
}

pub fn right<L, R>(value: R) -> Either<L, R> {
    Either::Right(value)
}

impl<L, R> Either<L, R> {
    pub(crate) fn side(&self) -> &'static str {
        match self {
            Either::Left(_) => "left",
            Either::Right(_) => "right",
        }
    }

    /// Applies whichever function matches the active variant.
    ///
    /// The other function is never called.
    pub fn case<U, FL, FR>(self, of_left: FL, of_right: FR) -> U
    where
        FL: FnOnce(L) -> U,
        FR: FnOnce(R) -> U,
    {
        trace!("case on {}", self.side());
        match self {
            Either::Left(value) => of_left(value),
            Either::Right(value) => of_right(value),
        }
    }

    /// Like [`Either::case`] but only for its effects, and without consuming `self`.
    pub fn inspect<FL, FR>(&self, of_left: FL, of_right: FR)
    where
        FL: FnOnce(&L),
        FR: FnOnce(&R),
    {
        trace!("inspect on {}", self.side());
        match self {
            Either::Left(value) => of_left(value),
            Either::Right(value) => of_right(value),
        }
    }

    pub fn map<U, F>(self, transform: F) -> Either<L, U>
    where
        F: FnOnce(R) -> U,
    {
        trace!("map on {}", self.side());
        match self {
            Either::Left(value) => Either::Left(value),
            Either::Right(value) => Either::Right(transform(value)),
        }
    }

    /// Chains a computation that may itself switch to `Left`.
    ///
    /// The result of `transform` is returned as is, so nothing gets wrapped twice.
    pub fn bind<U, F>(self, transform: F) -> Either<L, U>
    where
        F: FnOnce(R) -> Either<L, U>,
    {
        trace!("bind on {}", self.side());
        match self {
            Either::Left(value) => Either::Left(value),
            Either::Right(value) => transform(value),
        }
    }

    pub fn map_left<M, F>(self, transform: F) -> Either<M, R>
    where
        F: FnOnce(L) -> M,
    {
        match self {
            Either::Left(value) => Either::Left(transform(value)),
            Either::Right(value) => Either::Right(value),
        }
    }

    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    pub fn left(self) -> Option<L> {
        match self {
            Either::Left(value) => Some(value),
            Either::Right(_) => None,
        }
    }

    pub fn right(self) -> Option<R> {
        match self {
            Either::Left(_) => None,
            Either::Right(value) => Some(value),
        }
    }

    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Either::Left(value) => Either::Left(value),
            Either::Right(value) => Either::Right(value),
        }
    }

    pub fn flip(self) -> Either<R, L> {
        match self {
            Either::Left(value) => Either::Right(value),
            Either::Right(value) => Either::Left(value),
        }
    }

    pub fn left_or_else<F>(self, fold: F) -> L
    where
        F: FnOnce(R) -> L,
    {
        match self {
            Either::Left(value) => value,
            Either::Right(value) => fold(value),
        }
    }

    pub fn right_or_else<F>(self, fold: F) -> R
    where
        F: FnOnce(L) -> R,
    {
        match self {
            Either::Left(value) => fold(value),
            Either::Right(value) => value,
        }
    }

    pub fn into_result(self) -> Result<R, L> {
        match self {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

impl<T> Either<T, T> {
    pub fn into_inner(self) -> T {
        match self {
            Either::Left(value) | Either::Right(value) => value,
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Either::Right(value),
            Err(value) => Either::Left(value),
        }
    }
}
