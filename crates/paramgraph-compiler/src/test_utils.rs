//! Test fixtures and snapshot helpers.

use paramgraph_core::schema::{
    Document, InputLocation, InputType, InputTypeRef, Mappings, ModelMapping, OutputLocation,
    OutputType, OutputTypeRef, Schema, SchemaArg, SchemaField,
};
use paramgraph_core::{Colors, ModelAction};
use paramgraph_format::{ParamGraph, dump};

/// Snapshot test for the dump of a built graph.
#[macro_export]
macro_rules! shot_graph {
    ($doc:expr, @$snapshot:literal) => {{
        let graph = $crate::build_param_graph(&$doc);
        let output = $crate::test_utils::dump_plain(&graph);
        insta::assert_snapshot!(output.trim_end(), @$snapshot);
    }};
}

/// Programmatic schema document builder.
///
/// Types are registered in call order; `query`/`mutation` add fields to the
/// `prisma.Query`/`prisma.Mutation` root types.
#[derive(Default)]
pub struct SchemaFixture {
    schema: Schema,
    query: Vec<SchemaField>,
    mutation: Vec<SchemaField>,
    models: Vec<ModelMapping>,
}

impl SchemaFixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(mut self, field: SchemaField) -> Self {
        self.query.push(field);
        self
    }

    pub fn mutation(mut self, field: SchemaField) -> Self {
        self.mutation.push(field);
        self
    }

    /// Input object type in the `prisma` namespace.
    pub fn input_type(mut self, name: &str, fields: Vec<SchemaArg>) -> Self {
        self.schema.input_object_types.prisma.push(InputType {
            name: name.to_owned(),
            fields,
        });
        self
    }

    /// Output object type in the `model` namespace.
    pub fn output_type(mut self, name: &str, fields: Vec<SchemaField>) -> Self {
        self.schema.output_object_types.model.push(OutputType {
            name: name.to_owned(),
            fields,
        });
        self
    }

    pub fn model(mut self, name: &str, operations: &[(ModelAction, &str)]) -> Self {
        let mapping = operations
            .iter()
            .fold(ModelMapping::new(name), |m, &(action, field)| {
                m.with_operation(action, field)
            });
        self.models.push(mapping);
        self
    }

    pub fn build(mut self) -> Document {
        if !self.query.is_empty() {
            self.schema.output_object_types.prisma.push(OutputType {
                name: "Query".to_owned(),
                fields: self.query,
            });
        }
        if !self.mutation.is_empty() {
            self.schema.output_object_types.prisma.push(OutputType {
                name: "Mutation".to_owned(),
                fields: self.mutation,
            });
        }
        Document {
            schema: self.schema,
            mappings: Mappings {
                model_operations: self.models,
            },
        }
    }
}

fn input_ref(name: &str, namespace: Option<&str>, location: InputLocation) -> InputTypeRef {
    InputTypeRef {
        type_name: name.to_owned(),
        namespace: namespace.map(str::to_owned),
        location,
        is_list: false,
    }
}

pub fn scalar(name: &str) -> InputTypeRef {
    input_ref(name, None, InputLocation::Scalar)
}

/// User enum, declared in the `model` namespace.
pub fn model_enum(name: &str) -> InputTypeRef {
    input_ref(name, Some("model"), InputLocation::EnumTypes)
}

/// Built-in enum such as `SortOrder`.
pub fn prisma_enum(name: &str) -> InputTypeRef {
    input_ref(name, Some("prisma"), InputLocation::EnumTypes)
}

pub fn object(name: &str) -> InputTypeRef {
    input_ref(name, Some("prisma"), InputLocation::InputObjectTypes)
}

pub fn field_ref(name: &str) -> InputTypeRef {
    input_ref(name, Some("prisma"), InputLocation::FieldRefTypes)
}

pub fn list(mut input_type: InputTypeRef) -> InputTypeRef {
    input_type.is_list = true;
    input_type
}

/// Parameterizable argument or input field.
pub fn arg(name: &str, input_types: Vec<InputTypeRef>) -> SchemaArg {
    SchemaArg {
        name: name.to_owned(),
        input_types,
        is_parameterizable: true,
    }
}

/// Argument whose scalar and enum alternatives never carry a parameter.
pub fn fixed_arg(name: &str, input_types: Vec<InputTypeRef>) -> SchemaArg {
    SchemaArg {
        is_parameterizable: false,
        ..arg(name, input_types)
    }
}

fn output_field(name: &str, args: Vec<SchemaArg>, output_type: OutputTypeRef) -> SchemaField {
    SchemaField {
        name: name.to_owned(),
        args,
        output_type,
    }
}

/// Field returning a `model`-namespace object type.
pub fn relation(name: &str, target: &str, args: Vec<SchemaArg>) -> SchemaField {
    output_field(
        name,
        args,
        OutputTypeRef {
            type_name: target.to_owned(),
            namespace: Some("model".to_owned()),
            location: OutputLocation::OutputObjectTypes,
            is_list: false,
        },
    )
}

pub fn scalar_field(name: &str, type_name: &str) -> SchemaField {
    output_field(
        name,
        Vec::new(),
        OutputTypeRef {
            type_name: type_name.to_owned(),
            namespace: None,
            location: OutputLocation::Scalar,
            is_list: false,
        },
    )
}

/// Field with arguments and a scalar result.
pub fn scalar_op(name: &str, type_name: &str, args: Vec<SchemaArg>) -> SchemaField {
    SchemaField {
        args,
        ..scalar_field(name, type_name)
    }
}

pub fn dump_plain(graph: &ParamGraph) -> String {
    dump(graph, Colors::OFF)
}
