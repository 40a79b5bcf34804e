//! # Function Definitions
//!
//! A [`FunctionDefinition`] is the declarative description of one
//! invocable function: name, parameters, the dotted reference to its
//! capability, and the ordered response schema. Definitions are loaded
//! from JSON documents, validated once, and never mutated afterwards.
//!
//! ## Response schema ordering
//!
//! [`ResponseSchema`] is an *ordered* name→type mapping. A single-entry
//! schema lets the capability return a bare value; a multi-entry schema
//! requires a positional sequence zipped with the entries in
//! declaration order. The order is load-bearing, so the schema is kept
//! in an [`IndexMap`], not a sorted map.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use telos_core::TypeExpr;

use crate::error::DefinitionError;
use crate::parameter::{Parameter, ParameterSpec};

/// The ordered name→type mapping describing a function's outputs.
#[derive(Debug, Clone)]
pub struct ResponseSchema {
    entries: IndexMap<String, TypeExpr>,
}

impl ResponseSchema {
    /// Parse and legality-check the raw name→type-string mapping.
    ///
    /// # Errors
    ///
    /// Fails when the mapping is empty or any type string is illegal.
    pub fn from_raw(
        function: &str,
        raw: IndexMap<String, String>,
    ) -> Result<Self, DefinitionError> {
        if raw.is_empty() {
            return Err(DefinitionError::EmptyResponse {
                function: function.to_string(),
            });
        }
        let mut entries = IndexMap::with_capacity(raw.len());
        for (name, source) in raw {
            let ty = TypeExpr::parse(&source).map_err(|source| {
                DefinitionError::IllegalResponseType {
                    function: function.to_string(),
                    name: name.clone(),
                    source,
                }
            })?;
            entries.insert(name, ty);
        }
        Ok(Self { entries })
    }

    /// Number of declared outputs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the schema declares no outputs. Never true for a
    /// schema that passed construction.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The single entry, when exactly one output is declared.
    pub fn single(&self) -> Option<(&str, &TypeExpr)> {
        match self.entries.len() {
            1 => self.entries.iter().next().map(|(name, ty)| (name.as_str(), ty)),
            _ => None,
        }
    }

    /// Iterate entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TypeExpr)> {
        self.entries.iter().map(|(name, ty)| (name.as_str(), ty))
    }

    /// The raw name→type-string shape, in declaration order.
    pub fn to_raw(&self) -> IndexMap<String, String> {
        self.entries
            .iter()
            .map(|(name, ty)| (name.clone(), ty.to_string()))
            .collect()
    }
}

/// The raw document shape of a function definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionSpec {
    /// Function name, used as the lookup key.
    pub name: String,
    /// Human-readable description.
    #[serde(default)]
    pub description: String,
    /// Ordered parameter specs.
    #[serde(default)]
    pub parameters: Vec<ParameterSpec>,
    /// Dotted reference to the capability, e.g. `"demo.salute"`.
    pub reference: String,
    /// Ordered output-name → type-string mapping.
    pub response: IndexMap<String, String>,
}

/// A validated function definition. Read-only after load.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "FunctionSpec", into = "FunctionSpec")]
pub struct FunctionDefinition {
    name: String,
    description: String,
    parameters: Vec<Parameter>,
    reference: String,
    response: ResponseSchema,
}

impl FunctionDefinition {
    /// Validate a raw spec into a definition.
    ///
    /// Each parameter is validated through [`Parameter::from_spec`];
    /// parameter names must be unique; the response schema must be
    /// non-empty with legal types.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule as a [`DefinitionError`].
    pub fn from_spec(spec: FunctionSpec) -> Result<Self, DefinitionError> {
        let FunctionSpec {
            name,
            description,
            parameters,
            reference,
            response,
        } = spec;

        let mut validated = Vec::with_capacity(parameters.len());
        for parameter_spec in parameters {
            let parameter = Parameter::from_spec(parameter_spec)?;
            if validated
                .iter()
                .any(|existing: &Parameter| existing.name() == parameter.name())
            {
                return Err(DefinitionError::DuplicateParameter {
                    function: name.clone(),
                    name: parameter.name().to_string(),
                });
            }
            validated.push(parameter);
        }

        let response = ResponseSchema::from_raw(&name, response)?;

        Ok(Self {
            name,
            description,
            parameters: validated,
            reference,
            response,
        })
    }

    /// Function name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Validated parameters, in declaration order.
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Dotted reference to the capability implementing this function.
    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// The declared response schema.
    pub fn response(&self) -> &ResponseSchema {
        &self.response
    }
}

impl TryFrom<FunctionSpec> for FunctionDefinition {
    type Error = DefinitionError;

    fn try_from(spec: FunctionSpec) -> Result<Self, Self::Error> {
        Self::from_spec(spec)
    }
}

impl From<FunctionDefinition> for FunctionSpec {
    fn from(definition: FunctionDefinition) -> Self {
        FunctionSpec {
            name: definition.name,
            description: definition.description,
            parameters: definition
                .parameters
                .into_iter()
                .map(ParameterSpec::from)
                .collect(),
            reference: definition.reference,
            response: definition.response.to_raw(),
        }
    }
}
