use crate::collect::{ParamSite, describe_type, has_example};
use crate::error::{DocumentError, child_pointer, schema_pointer};
use crate::oas::Document;
use crate::oas::access::{as_object, as_str, required};

/// Every operation parameter whose `schema` has no `example`, in document
/// order (paths, then verbs, then list position).
///
/// Each parameter must have a string `name` and a `schema` object with a
/// `type`, whether or not it already has an example.
pub fn collect_params(doc: &Document) -> Result<Vec<ParamSite>, DocumentError> {
    let mut out = Vec::new();

    for op in doc.operations()? {
        let list_ptr = child_pointer(&op.pointer, "parameters");
        for (index, param) in op.parameters()?.iter().enumerate() {
            let ptr = child_pointer(&list_ptr, &index.to_string());
            let param = as_object(param, &ptr)?;

            let name = as_str(required(param, "name", &ptr)?, &child_pointer(&ptr, "name"))?;
            let schema_ptr = schema_pointer(&ptr);
            let schema = as_object(required(param, "schema", &ptr)?, &schema_ptr)?;
            let ty = describe_type(schema, &schema_ptr)?;

            if has_example(schema) {
                continue;
            }

            out.push(ParamSite {
                path: op.path.to_string(),
                method: op.method,
                name: name.to_string(),
                ty,
            });
        }
    }

    Ok(out)
}
