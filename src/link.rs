//! Host extraction from links.
//!
//! The engine only accepts bare hosts. Callers holding full links
//! (`https://www.baidu.com/s?wd=x`) strip them down here first.

use std::net::IpAddr;

use url::{Host, Url};

use crate::error::{Result, TldError};

/// Return the host part of `link`.
///
/// Links with a scheme go through the URL parser, which lowercases the
/// host and drops userinfo, port, path, query and fragment. Links
/// without a scheme are cut at the first path/query/fragment delimiter
/// and the port is removed; the host is otherwise left as given.
pub fn host_from_link(link: &str) -> Result<String> {
    let link = link.trim();

    if link.contains("://") {
        let url = Url::parse(link)
            .map_err(|e| TldError::InvalidLink(format!("{}: {}", link, e)))?;
        return match url.host() {
            Some(Host::Domain(domain)) if !domain.is_empty() => Ok(domain.to_string()),
            Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => Err(TldError::InvalidLink(format!(
                "{}: IP address has no public suffix",
                link
            ))),
            _ => Err(TldError::InvalidLink(format!("{}: missing host", link))),
        };
    }

    let authority = match link.find(|c: char| matches!(c, '/' | '?' | '#')) {
        Some(pos) => &link[..pos],
        None => link,
    };
    let host = match authority.rfind('@') {
        Some(pos) => &authority[pos + 1..],
        None => authority,
    };
    if host.starts_with('[') {
        return Err(TldError::InvalidLink(format!(
            "{}: IP address has no public suffix",
            link
        )));
    }
    let host = match host.split_once(':') {
        Some((host, _port)) => host,
        None => host,
    };

    if host.is_empty() {
        return Err(TldError::InvalidLink(format!("{}: missing host", link)));
    }
    if host.parse::<IpAddr>().is_ok() {
        return Err(TldError::InvalidLink(format!(
            "{}: IP address has no public suffix",
            link
        )));
    }
    Ok(host.to_string())
}
