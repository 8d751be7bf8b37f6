//! Emit styles: how an [`ObjectTypeDoc`] becomes a `type.ts` file.

use crate::config::OutputStyle;
use crate::document::ObjectTypeDoc;

/// Serialises an object type for one flavour of the schema library.
pub trait TypeFileEmitter {
    fn emit(&self, doc: &ObjectTypeDoc) -> String;

    /// Whether per-model and root `index.ts` files are maintained.
    fn writes_index(&self) -> bool;
}

/// `@nexus/schema`: `export const User = objectType({...})`.
pub struct StandaloneEmitter;

impl TypeFileEmitter for StandaloneEmitter {
    fn emit(&self, doc: &ObjectTypeDoc) -> String {
        format!(
            "import {{ objectType }} from '@nexus/schema'\n\nexport const {} = {}",
            doc.name,
            doc.render_call()
        )
    }

    fn writes_index(&self) -> bool {
        true
    }
}

/// `nexus`: `schema.objectType({...})` on the shared builder.
pub struct SharedBuilderEmitter;

impl TypeFileEmitter for SharedBuilderEmitter {
    fn emit(&self, doc: &ObjectTypeDoc) -> String {
        format!(
            "import {{ schema }} from 'nexus'\n\nschema.{}",
            doc.render_call()
        )
    }

    fn writes_index(&self) -> bool {
        false
    }
}

impl OutputStyle {
    pub fn emitter(self) -> Box<dyn TypeFileEmitter> {
        match self {
            OutputStyle::Standalone => Box::new(StandaloneEmitter),
            OutputStyle::SharedBuilder => Box::new(SharedBuilderEmitter),
        }
    }
}
