//! Sample objects: a typed `Person`, a container `Roster`, and record-based graph nodes.

use std::cell::RefCell;
use std::rc::Rc;

use verdict_core::{ObjectRef, Record, Validatable, Value, VerdictError, VerdictResult};

pub const PERSON: &str = "Person";
pub const ROSTER: &str = "Roster";
pub const NODE: &str = "Node";

/// A hand-written `Validatable` with typed fields and one read-only member.
#[derive(Debug, Clone, Default)]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub email: String,
    pub address: Option<ObjectRef>,
}

impl Person {
    pub fn new(id: i64, name: &str, age: i64) -> Self {
        Self {
            id,
            name: name.to_string(),
            age,
            email: format!("{}@example.org", name.to_ascii_lowercase()),
            address: None,
        }
    }

    /// Shared typed handle plus the engine-facing reference to the same object.
    pub fn shared(self) -> (Rc<RefCell<Person>>, ObjectRef) {
        let shared = Rc::new(RefCell::new(self));
        let object = ObjectRef::from_shared(shared.clone()).expect("fresh person is not borrowed");
        (shared, object)
    }

    fn rejected(member: &str, value: &Value) -> VerdictError {
        VerdictError::Rejected {
            type_name: PERSON.to_string(),
            member: member.to_string(),
            reason: format!("unexpected {} value", value.kind()),
        }
    }
}

impl Validatable for Person {
    fn type_name(&self) -> &str {
        PERSON
    }

    fn members(&self) -> Vec<String> {
        ["id", "name", "age", "email", "address"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    fn get(&self, member: &str) -> Option<Value> {
        match member {
            "id" => Some(Value::Int(self.id)),
            "name" => Some(Value::from(self.name.as_str())),
            "age" => Some(Value::Int(self.age)),
            "email" => Some(Value::from(self.email.as_str())),
            "address" => Some(Value::from(self.address.clone())),
            _ => None,
        }
    }

    fn set(&mut self, member: &str, value: Value) -> VerdictResult<()> {
        match (member, value) {
            ("id", _) => Err(VerdictError::ReadOnlyMember {
                type_name: PERSON.to_string(),
                member: "id".to_string(),
            }),
            ("name", Value::Text(name)) => {
                self.name = name;
                Ok(())
            }
            ("age", Value::Int(age)) => {
                self.age = age;
                Ok(())
            }
            ("email", Value::Text(email)) => {
                self.email = email;
                Ok(())
            }
            ("address", Value::Object(address)) => {
                self.address = Some(address);
                Ok(())
            }
            ("address", Value::Null) => {
                self.address = None;
                Ok(())
            }
            (known @ ("name" | "age" | "email" | "address"), value) => {
                Err(Person::rejected(known, &value))
            }
            (other, _) => Err(VerdictError::MemberNotFound {
                type_name: PERSON.to_string(),
                member: other.to_string(),
            }),
        }
    }
}

/// A named collection of objects: validated as an object and iterated as a container.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    pub title: String,
    pub entries: Vec<ObjectRef>,
}

impl Roster {
    pub fn new(title: &str, entries: Vec<ObjectRef>) -> Self {
        Self {
            title: title.to_string(),
            entries,
        }
    }
}

impl Validatable for Roster {
    fn type_name(&self) -> &str {
        ROSTER
    }

    fn members(&self) -> Vec<String> {
        vec!["title".to_string()]
    }

    fn get(&self, member: &str) -> Option<Value> {
        (member == "title").then(|| Value::from(self.title.as_str()))
    }

    fn set(&mut self, member: &str, value: Value) -> VerdictResult<()> {
        match (member, value) {
            ("title", Value::Text(title)) => {
                self.title = title;
                Ok(())
            }
            (member, _) => Err(VerdictError::MemberNotFound {
                type_name: ROSTER.to_string(),
                member: member.to_string(),
            }),
        }
    }

    fn elements(&self) -> Option<Vec<Value>> {
        Some(self.entries.iter().cloned().map(Value::Object).collect())
    }
}

/// A graph node: `name`, `score`, two links (`left`, `right`) and a `children` list.
pub fn node(name: &str, score: i64) -> ObjectRef {
    Record::new(NODE)
        .with("name", name)
        .with("score", score)
        .with("left", Value::Null)
        .with("right", Value::Null)
        .with("children", Value::List(Vec::new()))
        .into_ref()
}

/// Point `from.member` at `to`.
pub fn link(from: &ObjectRef, member: &str, to: &ObjectRef) {
    from.set(member, Value::Object(to.clone()))
        .expect("node member exists");
}

/// Replace `from.children` with the given nodes.
pub fn adopt(from: &ObjectRef, children: &[&ObjectRef]) {
    let list = children.iter().map(|c| Value::Object((*c).clone())).collect();
    from.set("children", Value::List(list))
        .expect("node has children");
}
