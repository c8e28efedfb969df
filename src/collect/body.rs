use crate::collect::{PropertySite, describe_type, has_example};
use crate::error::{DocumentError, child_pointer};
use crate::oas::Document;
use crate::oas::access::as_object;
use crate::oas::operation::body_properties_pointer;

/// Properties of JSON request-body schemas of write operations that have no
/// `example`. Each operation contributes its own sites, so the same property
/// name under two operations is collected twice.
pub fn collect_body_properties(doc: &Document) -> Result<Vec<PropertySite>, DocumentError> {
    let mut out = Vec::new();

    for op in doc.operations()? {
        if !op.method.is_write() {
            continue;
        }
        let Some(properties) = op.json_body_properties()? else {
            continue;
        };

        let props_ptr = body_properties_pointer(&op.pointer);

        for (name, schema) in properties {
            let ptr = child_pointer(&props_ptr, name);
            let schema = as_object(schema, &ptr)?;
            let ty = describe_type(schema, &ptr)?;

            if has_example(schema) {
                continue;
            }

            out.push(PropertySite {
                path: op.path.to_string(),
                method: op.method,
                name: name.clone(),
                ty,
            });
        }
    }

    Ok(out)
}
