// Classification of a song service call, the only signal the transport
// layer uses to pick a status code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Ok,
    NotFound,
    BadRequest,
    Err,
}

// Result of a song service call. A payload only exists on `Ok`; operations
// without a return value use the default `()` payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ServiceResponse<T = ()> {
    Ok(T),
    NotFound,
    BadRequest,
    Err,
}

impl<T> ServiceResponse<T> {
    pub fn outcome(&self) -> Outcome {
        match self {
            Self::Ok(_) => Outcome::Ok,
            Self::NotFound => Outcome::NotFound,
            Self::BadRequest => Outcome::BadRequest,
            Self::Err => Outcome::Err,
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Ok(data) => Some(data),
            _ => None,
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            Self::Ok(data) => Some(data),
            _ => None,
        }
    }
}

impl ServiceResponse {
    // Successful call with nothing to return.
    pub fn ok() -> Self {
        Self::Ok(())
    }
}
