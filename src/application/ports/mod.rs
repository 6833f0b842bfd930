pub mod clock;
pub mod cookie_jar;
pub mod request_cookies;

pub use clock::{Clock, SystemClock};
pub use cookie_jar::{SessionCookie, SessionCookieJar};
pub use request_cookies::RequestCookies;
