use super::{ForeignKeyDirection, Keys, Resolved};

use navlink_core::{uri::parse_reference, Error, Result, Schema};
use url::Url;

/// Replaces the keys of the side named by the reference target.
///
/// For a collection-valued navigation the target names the row being
/// updated (`Customers(1)/Orders/$ref` + `Orders(42)` updates order 42).
/// Otherwise it names the row being referenced. Without a target the keys
/// from the path are kept.
pub fn apply_target(
    schema: &Schema,
    base: &Url,
    target: Option<&str>,
    resolved: &mut Resolved<'_>,
) -> Result<()> {
    let Some(target) = target else {
        return Ok(());
    };

    let segment = parse_reference(&schema.app, target, base)?;

    let side = match resolved.direction {
        ForeignKeyDirection::ReferencedOwnsFk => &mut resolved.update,
        ForeignKeyDirection::OriginOwnsFk => &mut resolved.reference,
    };

    if segment.entity_type != side.entity_type.id {
        return Err(Error::invalid_uri(format!(
            "reference `{target}` addresses `{}`; expected an entity of type `{}`",
            schema.app.entity_set(segment.entity_set).name,
            side.entity_type.name
        )));
    }

    side.keys = Keys::Resolved(segment.keys);
    Ok(())
}
