use crate::errors::{VerdictError, VerdictResult};

use super::{ObjectRef, Validatable, Value};

/// A generic object: a type name and an ordered list of named fields.
#[derive(Debug, Clone, Default)]
pub struct Record {
    type_name: String,
    fields: Vec<(String, Value)>,
}

impl Record {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            fields: Vec::new(),
        }
    }

    /// Builder-style field insertion.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert or replace a field, returning the previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.fields.push((name, value));
                None
            }
        }
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn into_ref(self) -> ObjectRef {
        ObjectRef::new(self)
    }
}

impl Validatable for Record {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn members(&self) -> Vec<String> {
        self.fields.iter().map(|(n, _)| n.clone()).collect()
    }

    fn get(&self, member: &str) -> Option<Value> {
        self.field(member).cloned()
    }

    fn set(&mut self, member: &str, value: Value) -> VerdictResult<()> {
        match self.fields.iter_mut().find(|(n, _)| n == member) {
            Some((_, slot)) => {
                *slot = value;
                Ok(())
            }
            None => Err(VerdictError::MemberNotFound {
                type_name: self.type_name.clone(),
                member: member.to_string(),
            }),
        }
    }
}
