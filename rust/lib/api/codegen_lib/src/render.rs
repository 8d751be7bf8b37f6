//! Schema model → [`ObjectTypeDoc`].

use std::collections::BTreeSet;

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::document::{
    is_identifier, FieldBuilder, FieldDoc, FieldOptions, ObjectTypeDoc, Resolver,
};
use crate::error::{CodegenError, Result};
use crate::ir::{SchemaField, SchemaModel, TypeKind};

/// Build the object type for `model`, dropping fields named in `excluded`.
pub fn build_object_type(
    model: &SchemaModel,
    excluded: &BTreeSet<&str>,
) -> Result<ObjectTypeDoc> {
    if !is_identifier(&model.name) {
        return Err(CodegenError::InvalidIdentifier {
            kind: "model",
            name: model.name.clone(),
        });
    }

    let mut fields = Vec::with_capacity(model.fields.len());
    for field in &model.fields {
        if excluded.contains(field.name.as_str()) {
            debug!("{}.{}: excluded", model.name, field.name);
            continue;
        }
        fields.push(render_field(&model.name, field)?);
    }

    Ok(ObjectTypeDoc {
        name: model.name.clone(),
        fields,
    })
}

pub fn render_field(model: &str, field: &SchemaField) -> Result<FieldDoc> {
    let ty = &field.output_type;
    let builder = if ty.is_plain_scalar() {
        let method = ty.type_name.to_lowercase();
        if !is_identifier(&method) {
            return Err(CodegenError::InvalidIdentifier {
                kind: "scalar",
                name: ty.type_name.clone(),
            });
        }
        FieldBuilder::Scalar(method)
    } else {
        FieldBuilder::Generic
    };

    Ok(FieldDoc {
        name: field.name.clone(),
        builder,
        options: field_options(model, field),
    })
}

/// Derive the options object for one field.
///
/// Lists are never null and their members are always nullable; everything
/// else is nullable unless required.
pub fn field_options(model: &str, field: &SchemaField) -> FieldOptions {
    let ty = &field.output_type;
    let mut options = if ty.is_list {
        FieldOptions {
            nullable: false,
            list: Some(vec![true]),
            ..Default::default()
        }
    } else {
        FieldOptions {
            nullable: !ty.is_required,
            ..Default::default()
        }
    };

    if !ty.is_plain_scalar() {
        options.type_name = Some(ty.type_name.clone());
    }

    let mut args = IndexMap::new();
    for arg in &field.args {
        // First candidate only.
        match arg.input_type.first() {
            Some(input) => {
                args.insert(arg.name.clone(), input.type_name.clone());
            }
            None => warn!(
                "{}.{}: argument {} has no input type, skipping",
                model, field.name, arg.name
            ),
        }
    }
    if !args.is_empty() {
        options.args = Some(args);
    }

    if ty.kind == TypeKind::Object {
        options.resolve = Some(Resolver::ParentProperty(field.name.clone()));
    }

    options
}
