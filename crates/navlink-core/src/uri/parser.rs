use super::{EntitySetSegment, KeyPredicate, NavigationSegment, ResourcePath, Segment};
use crate::{
    schema::app::{self, EntityType},
    Error, Result,
};

use percent_encoding::percent_decode_str;
use url::Url;

const REF: &str = "$ref";

impl ResourcePath {
    /// Parses `path`, relative to the service root, against the protocol
    /// model.
    ///
    /// Query strings and fragments are ignored. Names are resolved, key
    /// predicate names are checked against the entity key, but values are left
    /// as raw text.
    pub fn parse(schema: &app::Schema, path: &str) -> Result<ResourcePath> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = path.trim_start_matches('/');

        if path.is_empty() {
            return Err(Error::invalid_uri("empty resource path"));
        }

        let parts = split_outside_quotes(path, '/')?;
        let mut segments = Vec::with_capacity(parts.len());
        let mut reference = false;
        let mut current: Option<&EntityType> = None;

        for (i, raw) in parts.iter().enumerate() {
            let last = i + 1 == parts.len();

            if raw.is_empty() {
                // Tolerate a single trailing slash
                if last {
                    break;
                }
                return Err(Error::invalid_uri(format!("empty segment in `{path}`")));
            }

            let decoded = decode(raw)?;

            if reference {
                return Err(Error::invalid_uri(format!(
                    "`{REF}` must be the last segment of `{path}`"
                )));
            }

            if decoded == REF {
                if current.is_none() {
                    return Err(Error::invalid_uri(format!(
                        "`{REF}` cannot start a resource path"
                    )));
                }
                reference = true;
                continue;
            }

            let (name, keys) = split_segment(&decoded)?;

            let segment = match current {
                None => {
                    let Some(entity_set) = schema.entity_set_by_name(name) else {
                        return Err(Error::invalid_uri(format!("unknown entity set `{name}`")));
                    };
                    let entity_type = schema.entity_type(entity_set.entity_type);

                    Segment::EntitySet(EntitySetSegment {
                        entity_set: entity_set.id,
                        entity_type: entity_type.id,
                        keys: parse_keys(entity_type, keys)?,
                    })
                }
                Some(source) => {
                    let Some(navigation) = source.navigation_by_name(name) else {
                        return Err(if source.property(name).is_some() {
                            Error::invalid_uri(format!(
                                "`{}.{name}` is not a navigation property",
                                source.name
                            ))
                        } else {
                            Error::invalid_uri(format!(
                                "unknown navigation `{}.{name}`",
                                source.name
                            ))
                        });
                    };
                    let target = schema.entity_type(navigation.target);

                    Segment::Navigation(NavigationSegment {
                        navigation: navigation.id,
                        target: target.id,
                        collection: navigation.collection,
                        keys: parse_keys(target, keys)?,
                    })
                }
            };

            current = Some(match &segment {
                Segment::EntitySet(segment) => schema.entity_type(segment.entity_type),
                Segment::Navigation(segment) => schema.entity_type(segment.target),
            });
            segments.push(segment);
        }

        Ok(ResourcePath {
            segments,
            reference,
        })
    }
}

/// Parses a reference target, an absolute or root-relative URL naming a
/// single entity, e.g. `http://host/svc/Customers(7)` or `Customers(7)`.
pub fn parse_reference(schema: &app::Schema, target: &str, base: &Url) -> Result<EntitySetSegment> {
    let url = base.join(target)?;

    let rest = if url.origin() == base.origin() {
        url.path().strip_prefix(base.path())
    } else {
        None
    };

    let Some(rest) = rest else {
        return Err(Error::invalid_uri(format!(
            "reference `{target}` is not under the service root `{base}`"
        )));
    };

    let path = ResourcePath::parse(schema, rest)?;

    match <[Segment; 1]>::try_from(path.segments) {
        Ok([Segment::EntitySet(segment)]) if !segment.keys.is_empty() && !path.reference => {
            Ok(segment)
        }
        _ => Err(Error::invalid_uri(format!(
            "reference `{target}` must address a single entity by key"
        ))),
    }
}

fn decode(raw: &str) -> Result<String> {
    percent_decode_str(raw)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|_| Error::invalid_uri(format!("segment `{raw}` is not valid UTF-8")))
}

/// Splits `src` on `delim`, ignoring delimiters inside single-quoted string
/// literals. `''` inside a literal is an escaped quote.
fn split_outside_quotes(src: &str, delim: char) -> Result<Vec<&str>> {
    let mut parts = vec![];
    let mut quoted = false;
    let mut start = 0;

    for (i, c) in src.char_indices() {
        match c {
            '\'' => quoted = !quoted,
            c if c == delim && !quoted => {
                parts.push(&src[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }

    if quoted {
        return Err(Error::invalid_uri(format!(
            "unterminated string literal in `{src}`"
        )));
    }

    parts.push(&src[start..]);
    Ok(parts)
}

/// Splits `Name(keys)` into the name and the text between the parentheses.
fn split_segment(src: &str) -> Result<(&str, Option<&str>)> {
    let Some(open) = src.find('(') else {
        if src.contains(')') {
            return Err(Error::invalid_uri(format!(
                "unbalanced parenthesis in `{src}`"
            )));
        }
        return Ok((src, None));
    };

    let Some(keys) = src[open + 1..].strip_suffix(')') else {
        return Err(Error::invalid_uri(format!(
            "unbalanced parenthesis in `{src}`"
        )));
    };

    let name = &src[..open];

    if name.is_empty() {
        return Err(Error::invalid_uri(format!("missing name in `{src}`")));
    }

    Ok((name, Some(keys)))
}

fn parse_keys(entity_type: &EntityType, src: Option<&str>) -> Result<Vec<KeyPredicate>> {
    let Some(src) = src else {
        return Ok(vec![]);
    };

    let parts = split_outside_quotes(src, ',')?;
    let mut keys: Vec<KeyPredicate> = Vec::with_capacity(parts.len());

    for part in &parts {
        let part = part.trim();

        if part.is_empty() {
            return Err(Error::invalid_uri(format!(
                "empty key predicate for `{}`",
                entity_type.name
            )));
        }

        let key = match split_outside_quotes(part, '=')?.as_slice() {
            [value] => {
                // Bare values are only allowed for single-property keys
                let mut key_properties = entity_type.key_properties();

                match (parts.len(), key_properties.len(), key_properties.next()) {
                    (1, 1, Some(property)) => KeyPredicate::new(&property.name, value.trim()),
                    _ => {
                        return Err(Error::invalid_uri(format!(
                            "key of `{}` must be given as `name=value` pairs",
                            entity_type.name
                        )))
                    }
                }
            }
            [name, value] => {
                let name = name.trim();

                if !entity_type.is_key_property(name) {
                    return Err(Error::invalid_uri(format!(
                        "`{name}` is not a key property of `{}`",
                        entity_type.name
                    )));
                }

                KeyPredicate::new(name, value.trim())
            }
            _ => {
                return Err(Error::invalid_uri(format!(
                    "malformed key predicate `{part}`"
                )))
            }
        };

        if keys.iter().any(|existing| existing.name == key.name) {
            return Err(Error::invalid_uri(format!(
                "duplicate key property `{}`",
                key.name
            )));
        }

        if key.text.is_empty() {
            return Err(Error::invalid_uri(format!(
                "missing value for key property `{}`",
                key.name
            )));
        }

        keys.push(key);
    }

    if keys.len() != entity_type.key.len() {
        return Err(Error::invalid_uri(format!(
            "key of `{}` has {} properties, {} given",
            entity_type.name,
            entity_type.key.len(),
            keys.len()
        )));
    }

    Ok(keys)
}
