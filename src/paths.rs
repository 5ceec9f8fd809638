//! Positional path-template resolution.
//!
//! Every endpoint path in this crate is a template with ordered `{}`
//! placeholders (`"files/v1/assets/{}/proxies/{}/"`). Resolution is strict:
//! supplying fewer or more parameters than placeholders is a caller error,
//! never a silently wrong URL.

use crate::Error;

/// Substitutes `params` into the `{}` placeholders of `template`, in order.
pub(crate) fn resolve(template: &str, params: &[&str]) -> Result<String, Error> {
    let expected = template.matches("{}").count();
    if expected != params.len() {
        return Err(Error::PathParamCount {
            expected,
            given: params.len(),
        });
    }
    let mut pieces = template.split("{}");
    let mut out = String::with_capacity(template.len() + params.len() * 36);
    out.push_str(pieces.next().unwrap_or(""));
    for (param, piece) in params.iter().zip(pieces) {
        out.push_str(param);
        out.push_str(piece);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_params_in_order() {
        let path = resolve("files/v1/assets/{}/proxies/{}/", &["a1", "p2"]).unwrap();
        assert_eq!(path, "files/v1/assets/a1/proxies/p2/");
    }

    #[test]
    fn no_placeholders_passes_through() {
        let path = resolve("files/v1/storages/", &[]).unwrap();
        assert_eq!(path, "files/v1/storages/");
    }

    #[test]
    fn too_few_params_is_an_error() {
        let err = resolve("assets/v1/assets/{}/segments/{}/", &["a1"]).unwrap_err();
        match err {
            Error::PathParamCount { expected, given } => {
                assert_eq!(expected, 2);
                assert_eq!(given, 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn too_many_params_is_an_error() {
        let err = resolve("files/v1/storages/{}/", &["s1", "extra"]).unwrap_err();
        assert!(matches!(
            err,
            Error::PathParamCount {
                expected: 1,
                given: 2
            }
        ));
    }

    #[test]
    fn resolved_path_has_no_leftover_placeholders() {
        let path = resolve("metadata/v1/assets/{}/segments/{}/views/{}/", &["a", "s", "v"]).unwrap();
        assert!(!path.contains("{}"));
        assert!(!path.contains("//"));
    }
}
