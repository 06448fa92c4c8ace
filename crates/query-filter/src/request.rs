//! Adapters from `http` request types.
//!
//! The parser itself never decodes. These helpers play the caller's part:
//! they read the path and raw query of a request URI and percent-decode the
//! query before handing it over. Decoding is raw (`%XX` only, `+` stays a
//! literal plus) and happens before the query is split, so an encoded `%26`
//! separates segments like a plain `&`.

use std::borrow::Cow;

use http::{Request, Uri};

use crate::error::Result;
use crate::parser::FilterParser;
use crate::reserved::ParserConfig;

/// Percent-decodes a raw query string.
pub fn decode_query(raw: &str) -> Result<Cow<'_, str>> {
    Ok(urlencoding::decode(raw)?)
}

impl FilterParser {
    /// Parses the query of a request URI.
    ///
    /// # Example
    ///
    /// ```
    /// use http::Uri;
    /// use query_filter::{FilterParser, Operator, ParserConfig};
    ///
    /// let uri: Uri = "/users?name-lk=Jo%25&age-max=40".parse().unwrap();
    /// let parser = FilterParser::from_uri(&uri, ParserConfig::default()).unwrap();
    ///
    /// assert_eq!(parser.path(), "/users");
    /// assert_eq!(parser.query_parameter("name").unwrap().value, "Jo%");
    /// assert_eq!(parser.query_parameter("age").unwrap().operator, Operator::Lte);
    /// ```
    pub fn from_uri(uri: &Uri, config: ParserConfig) -> Result<Self> {
        let query = uri.query().map(decode_query).transpose()?;
        FilterParser::with_config(uri.path(), query.as_deref(), config)
    }

    /// Parses the query of a request's URI.
    pub fn from_request<B>(request: &Request<B>, config: ParserConfig) -> Result<Self> {
        FilterParser::from_uri(request.uri(), config)
    }
}
