//! Business logic shared by every front end

mod shortener;

pub use shortener::{
    IdSource, MAX_ID_ATTEMPTS, NoDelay, RandomIdSource, ShortenerService, SubmitDelay, TokioDelay,
    build_short_url,
};
