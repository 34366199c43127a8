use crate::error::{GitHubClientError, GitHubClientResult};
use anyhow::anyhow;
use reqwest::header::{HeaderMap, LINK};
use reqwest::Url;
use std::collections::HashMap;
use std::ops::RangeInclusive;

/// Remaining pages of a paginated REST listing, as advertised by the
/// `Link` response header
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct PageLinks {
    pub(crate) next_page: usize,
    pub(crate) last_page: usize,
}

impl PageLinks {
    pub(crate) fn from_headers(headers: &HeaderMap) -> GitHubClientResult<Option<PageLinks>> {
        let Some(link_header) = headers.get(LINK) else {
            return Ok(None);
        };

        let links = Self::parse_link_header(
            link_header
                .to_str()
                .map_err(|e| GitHubClientError::Other(anyhow!(e)))?,
        );

        let Some(next_url) = Self::get_link_url(&links, "next")? else {
            return Ok(None);
        };

        // Some listings advertise only "next"
        let last_page = match Self::get_link_url(&links, "last")? {
            Some(last_url) => Self::page_number(&last_url)?,
            None => Self::page_number(&next_url)?,
        };

        Ok(Some(PageLinks {
            next_page: Self::page_number(&next_url)?,
            last_page,
        }))
    }

    pub(crate) fn remaining(&self) -> RangeInclusive<usize> {
        self.next_page..=self.last_page
    }

    fn parse_link_header(s: &str) -> HashMap<String, String> {
        fn parse_url_part(s: &str) -> Option<String> {
            s.strip_prefix('<')
                .and_then(|s0| s0.strip_suffix('>'))
                .map(|s1| s1.to_string())
        }

        fn parse_rel_part(s: &str) -> Option<String> {
            s.strip_prefix("rel=\"")
                .and_then(|s0| s0.strip_suffix('"'))
                .map(|s1| s1.to_string())
        }

        s.split(',')
            .filter_map(|part| {
                part.split_once(';').and_then(|(u, r)| {
                    parse_url_part(u.trim())
                        .and_then(|u0| parse_rel_part(r.trim()).map(|r0| (r0, u0)))
                })
            })
            .collect::<HashMap<_, _>>()
    }

    fn get_link_url(links: &HashMap<String, String>, k: &str) -> GitHubClientResult<Option<Url>> {
        let Some(s) = links.get(k) else {
            return Ok(None);
        };

        Ok(Some(
            s.parse::<Url>()
                .map_err(|e| GitHubClientError::Other(anyhow!(e)))?,
        ))
    }

    fn page_number(url: &Url) -> GitHubClientResult<usize> {
        url.query_pairs()
            .find(|(n, _)| n == "page")
            .ok_or_else(|| GitHubClientError::Other(anyhow!("page missing from {url}")))?
            .1
            .parse::<usize>()
            .map_err(|e| GitHubClientError::Other(anyhow!(e)))
    }
}

#[cfg(test)]
mod tests {
    use super::PageLinks;
    use reqwest::header::{HeaderMap, HeaderValue, LINK};

    fn headers(link: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(LINK, HeaderValue::from_str(link).unwrap());
        headers
    }

    #[test]
    fn no_link_header() {
        assert_eq!(PageLinks::from_headers(&HeaderMap::new()).unwrap(), None);
    }

    #[test]
    fn next_and_last() {
        let links = PageLinks::from_headers(&headers(
            "<https://api.github.com/repositories/1/hooks?per_page=100&page=2>; rel=\"next\", \
             <https://api.github.com/repositories/1/hooks?per_page=100&page=4>; rel=\"last\"",
        ))
        .unwrap()
        .unwrap();
        assert_eq!(
            links,
            PageLinks {
                next_page: 2,
                last_page: 4
            }
        );
        assert_eq!(links.remaining().collect::<Vec<_>>(), vec![2, 3, 4]);
    }

    #[test]
    fn last_page_has_no_next() {
        let links = PageLinks::from_headers(&headers(
            "<https://api.github.com/repositories/1/hooks?page=1>; rel=\"first\", \
             <https://api.github.com/repositories/1/hooks?page=2>; rel=\"prev\"",
        ))
        .unwrap();
        assert_eq!(links, None);
    }

    #[test]
    fn next_without_last() {
        let links = PageLinks::from_headers(&headers(
            "<https://api.github.com/repositories/1/hooks?page=3>; rel=\"next\"",
        ))
        .unwrap()
        .unwrap();
        assert_eq!(links.remaining().collect::<Vec<_>>(), vec![3]);
    }

    #[test]
    fn next_without_page_number_is_an_error() {
        assert!(PageLinks::from_headers(&headers(
            "<https://api.github.com/repositories/1/hooks?cursor=abc>; rel=\"next\"",
        ))
        .is_err());
    }
}
