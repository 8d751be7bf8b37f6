//! Object-type definition generator.
//!
//! A run has two phases: [`TypeDefinitionGenerator::plan`] turns the schema
//! into a list of files without touching the disk, and
//! [`TypeDefinitionGenerator::generate`] reads the current root index,
//! plans, and writes the result.
//!
//! ```text
//! <output>/
//! ├── index.ts          (standalone style only)
//! ├── User/
//! │   ├── type.ts
//! │   └── index.ts      (standalone style only)
//! └── Post/
//!     └── ...
//! ```

use tracing::{debug, info};

use crate::collab::{Formatter, NoQueriesAndMutations, QueriesAndMutations, Tidy};
use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::index::RootIndex;
use crate::ir::Schema;
use crate::render::build_object_type;
use crate::style::TypeFileEmitter;
use crate::{fs, GeneratedFile};

/// Built-in root types that never get a definition.
const ROOT_TYPES: [&str; 3] = ["Query", "Mutation", "BatchPayload"];
const AGGREGATE_PREFIX: &str = "Aggregate";

/// Whether a model gets a generated definition under `config`.
pub fn is_eligible(name: &str, config: &GeneratorConfig) -> bool {
    !ROOT_TYPES.contains(&name)
        && !name.starts_with(AGGREGATE_PREFIX)
        && !config.exclude_models.contains(name)
        && config.models.as_ref().map_or(true, |models| models.contains(name))
}

/// Files produced by one run, plus which models they cover.
#[derive(Debug, Clone, Default)]
pub struct GenerationPlan {
    pub files: Vec<GeneratedFile>,
    /// Models that got a definition, in schema order.
    pub models: Vec<String>,
    /// Output types that were filtered out.
    pub skipped: Vec<String>,
}

pub struct TypeDefinitionGenerator {
    config: GeneratorConfig,
    emitter: Box<dyn TypeFileEmitter>,
    queries: Box<dyn QueriesAndMutations>,
    formatter: Box<dyn Formatter>,
}

impl TypeDefinitionGenerator {
    /// Generator with the emit style from `config`, no query/mutation
    /// output, and the [`Tidy`] formatter.
    pub fn new(config: GeneratorConfig) -> Self {
        let emitter = config.style.emitter();
        Self {
            config,
            emitter,
            queries: Box::new(NoQueriesAndMutations),
            formatter: Box::new(Tidy),
        }
    }

    pub fn with_queries(mut self, queries: impl QueriesAndMutations + 'static) -> Self {
        self.queries = Box::new(queries);
        self
    }

    pub fn with_formatter(mut self, formatter: impl Formatter + 'static) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    /// Compute every file of a run. `existing_index` is the current content
    /// of the root index (empty if there is none).
    pub fn plan(&self, schema: &Schema, existing_index: &str) -> Result<GenerationPlan> {
        let mut plan = GenerationPlan::default();
        let mut index = RootIndex::parse(existing_index);

        for model in &schema.output_types {
            if !is_eligible(&model.name, &self.config) {
                debug!("skipping {}", model.name);
                plan.skipped.push(model.name.clone());
                continue;
            }

            let excluded = self.config.excluded_fields(&model.name);
            let doc = build_object_type(model, &excluded)?;
            let dir = self.config.model_dir(&model.name);

            plan.files.push(GeneratedFile {
                path: dir.join("type.ts"),
                content: self.formatter.format(&self.emitter.emit(&doc)),
            });

            if self.emitter.writes_index() {
                let mut model_index = String::from("export * from './type'\n");
                model_index.push_str(&self.queries.generate(&model.name, &self.config));
                plan.files.push(GeneratedFile {
                    path: dir.join("index.ts"),
                    content: self.formatter.format(&model_index),
                });
                index.insert(&model.name);
            }

            plan.models.push(model.name.clone());
        }

        if self.emitter.writes_index() {
            plan.files.push(GeneratedFile {
                path: self.config.root_index_path(),
                content: index.render(self.formatter.as_ref()),
            });
        }

        Ok(plan)
    }

    /// Plan and write. I/O failures abort the run; files written before the
    /// failure are left in place.
    pub fn generate(&self, schema: &Schema) -> Result<GenerationPlan> {
        let existing_index = if self.emitter.writes_index() {
            fs::read_if_exists(&self.config.root_index_path())?
        } else {
            String::new()
        };

        let plan = self.plan(schema, &existing_index)?;
        fs::write_all(&plan.files)?;

        for model in &plan.models {
            info!("generated {}", self.config.model_dir(model).display());
        }
        info!(
            "{} models generated, {} skipped, {} files written to {}",
            plan.models.len(),
            plan.skipped.len(),
            plan.files.len(),
            self.config.output.display()
        );
        Ok(plan)
    }
}
