/// Read access to the cookies sent with an inbound request.
///
/// Implemented for the HTTP framework's request types so a route guard can
/// authenticate with nothing but the request in hand.
pub trait RequestCookies {
    fn cookie_value(&self, name: &str) -> Option<String>;
}
