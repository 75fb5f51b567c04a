//! Folding a field's accepted types into one input edge.

use paramgraph_core::schema::{InputLocation, InputTypeRef, SchemaArg};
use paramgraph_format::{EdgeFlags, InputEdge, ScalarMask};

use super::{SchemaTraverser, invariants};

/// Namespace whose enums are user-declared (and named on the edge).
const MODEL_NAMESPACE: &str = "model";

impl<'d> SchemaTraverser<'_, 'd> {
    /// Merge every declaration of one field into a single edge.
    ///
    /// `variants` holds one entry for plain types and arguments, and one
    /// per declaring member for unions. Returns `None` when nothing about
    /// the field can carry a parameter.
    pub(super) fn merge_field_variants(&mut self, variants: &[&'d SchemaArg]) -> Option<InputEdge> {
        let mut scalars: Vec<&'d InputTypeRef> = Vec::new();
        let mut enums: Vec<&'d InputTypeRef> = Vec::new();
        let mut objects: Vec<&'d InputTypeRef> = Vec::new();

        for &variant in variants {
            for input_type in &variant.input_types {
                match input_type.location {
                    InputLocation::Scalar => {
                        if variant.is_parameterizable {
                            scalars.push(input_type);
                        }
                    }
                    InputLocation::EnumTypes => {
                        if variant.is_parameterizable {
                            enums.push(input_type);
                        }
                    }
                    InputLocation::InputObjectTypes => {
                        let seen = objects.iter().any(|o| {
                            o.type_name == input_type.type_name
                                && o.namespace == input_type.namespace
                                && o.is_list == input_type.is_list
                        });
                        if !seen {
                            objects.push(input_type);
                        }
                    }
                    InputLocation::FieldRefTypes => {}
                    InputLocation::Unknown => {
                        invariants::unknown_input_location(variant, input_type)
                    }
                }
            }
        }

        let mut flags = EdgeFlags::EMPTY;
        let mut scalar_mask = ScalarMask::EMPTY;

        for scalar in &scalars {
            scalar_mask |= ScalarMask::from_scalar_type(&scalar.type_name);
            flags |= if scalar.is_list {
                EdgeFlags::PARAM_LIST_SCALAR
            } else {
                EdgeFlags::PARAM_SCALAR
            };
        }

        // Only the first user enum is named; built-in enums carry nothing.
        let enum_name = enums
            .iter()
            .find(|e| e.namespace.as_deref() == Some(MODEL_NAMESPACE))
            .map(|e| {
                flags |= if e.is_list {
                    EdgeFlags::PARAM_LIST_ENUM
                } else {
                    EdgeFlags::PARAM_ENUM
                };
                self.builder.intern_string(&e.type_name)
            });

        let child = match objects.as_slice() {
            [] => None,
            [single] => {
                flags |= object_flag(single);
                self.build_input_type_node(&single.key())
            }
            many => {
                for object in many {
                    flags |= object_flag(object);
                }
                self.build_union_node(many.iter().map(|o| o.key()).collect())
            }
        };

        if flags.is_empty() {
            return None;
        }

        let mut edge = InputEdge::new(flags);
        if let Some(child) = child {
            edge = edge.with_child(child);
        }
        if !scalar_mask.is_empty() {
            edge = edge.with_scalar_mask(scalar_mask);
        }
        if let Some(name) = enum_name {
            edge = edge.with_enum_name(name);
        }
        Some(edge)
    }
}

fn object_flag(input_type: &InputTypeRef) -> EdgeFlags {
    if input_type.is_list {
        EdgeFlags::LIST_OBJECT
    } else {
        EdgeFlags::OBJECT
    }
}
