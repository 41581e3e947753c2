use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use crate::errors::{VerdictError, VerdictResult};

use super::Value;

/// An object whose members can be read, validated, and written back.
///
/// This is what a reflective host would discover at run time; here the object
/// describes itself once and the engine dispatches through the trait.
pub trait Validatable {
    /// Name used to look up rules in the registry.
    fn type_name(&self) -> &str;

    /// Member names, in validation order.
    fn members(&self) -> Vec<String>;

    /// Current value of a member, `None` if the member does not exist.
    fn get(&self, member: &str) -> Option<Value>;

    /// Replace the value of a member.
    fn set(&mut self, member: &str, value: Value) -> VerdictResult<()>;

    /// Elements of an object that is also a container.
    fn elements(&self) -> Option<Vec<Value>> {
        None
    }
}

/// Identity of a shared object, stable while any [`ObjectRef`] to it is alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(usize);

/// Shared handle to a [`Validatable`] object.
///
/// Cloning the handle shares the object. The type name is captured when the handle
/// is created so that rule lookup never needs to borrow the object.
#[derive(Clone)]
pub struct ObjectRef {
    inner: Rc<RefCell<dyn Validatable>>,
    type_name: Rc<str>,
}

impl ObjectRef {
    pub fn new<T: Validatable + 'static>(object: T) -> Self {
        let type_name: Rc<str> = Rc::from(object.type_name());
        let inner: Rc<RefCell<dyn Validatable>> = Rc::new(RefCell::new(object));
        Self { inner, type_name }
    }

    /// Wrap an object the caller keeps a typed handle to.
    pub fn from_shared<T: Validatable + 'static>(shared: Rc<RefCell<T>>) -> VerdictResult<Self> {
        let type_name: Rc<str> = match shared.try_borrow() {
            Ok(object) => Rc::from(object.type_name()),
            Err(_) => {
                return Err(VerdictError::ObjectBusy {
                    type_name: std::any::type_name::<T>().to_string(),
                })
            }
        };
        let inner: Rc<RefCell<dyn Validatable>> = shared;
        Ok(Self { inner, type_name })
    }

    pub fn id(&self) -> ObjectId {
        ObjectId(Rc::as_ptr(&self.inner) as *const () as usize)
    }

    /// Whether both handles point at the same object.
    pub fn ptr_eq(&self, other: &ObjectRef) -> bool {
        self.id() == other.id()
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn borrow(&self) -> VerdictResult<Ref<'_, dyn Validatable + 'static>> {
        self.inner.try_borrow().map_err(|_| self.busy())
    }

    pub fn borrow_mut(&self) -> VerdictResult<RefMut<'_, dyn Validatable + 'static>> {
        self.inner.try_borrow_mut().map_err(|_| self.busy())
    }

    pub fn members(&self) -> VerdictResult<Vec<String>> {
        Ok(self.borrow()?.members())
    }

    pub fn get(&self, member: &str) -> VerdictResult<Option<Value>> {
        Ok(self.borrow()?.get(member))
    }

    pub fn set(&self, member: &str, value: Value) -> VerdictResult<()> {
        self.borrow_mut()?.set(member, value)
    }

    pub fn elements(&self) -> VerdictResult<Option<Vec<Value>>> {
        Ok(self.borrow()?.elements())
    }

    fn busy(&self) -> VerdictError {
        VerdictError::ObjectBusy {
            type_name: self.type_name.to_string(),
        }
    }
}

// Never descends into the object: graphs may be cyclic.
impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectRef({}@{:#x})", self.type_name, self.id().0)
    }
}
