// Recursive traversal: applies the single-level container transforms at
// every depth, memoizing transformed containers by identity so shared and
// cyclic inputs terminate and keep their aliasing.
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::options::ResolvedOptions;
use crate::value::{push_unique, Value};
use crate::walk::containers::{transform_array_items, transform_map, transform_object};

pub(crate) struct Walker {
    options: ResolvedOptions,
    /// Original container address -> its transformed counterpart. Entries
    /// are inserted before recursing into children, so a back-reference to
    /// an ancestor resolves to the ancestor's (still in-progress) output.
    visited: HashMap<usize, Value>,
}

impl Walker {
    pub(crate) fn new(options: ResolvedOptions) -> Self {
        Walker {
            options,
            visited: HashMap::new(),
        }
    }

    /// Whether to descend from a node at `depth` into its children.
    fn descend(&self, depth: usize) -> bool {
        self.options.max_depth.is_none_or(|max| depth < max)
    }

    pub(crate) fn walk(&mut self, value: &Value, depth: usize) -> Value {
        let Some(id) = value.ref_id() else {
            return value.clone();
        };
        if let Some(seen) = self.visited.get(&id) {
            return seen.clone();
        }
        // The root's own keys are transformed unconditionally; only nodes
        // below it are subject to the depth bound.
        if depth > 0 && !self.descend(depth) {
            return value.clone();
        }

        let target = self.options.target;
        let source = self.options.source;
        match value {
            Value::Array(original) => {
                let shallow = transform_array_items(value, target, source);
                self.visited.insert(id, shallow.clone());
                // Recurse into the original elements, not the shallow copy:
                // each child applies its own shallow transform exactly once.
                // Feeding already-converted keys through again would mangle
                // them when an explicit source case skips re-detection.
                // Children sitting at the depth limit keep the keys the
                // array-level transform gave them, so no recursion then.
                if self.descend(depth + 1) {
                    if let Value::Array(inner) = &shallow {
                        let snapshot: Vec<Value> = original.borrow().clone();
                        let walked: Vec<Value> = snapshot
                            .iter()
                            .map(|item| self.walk(item, depth + 1))
                            .collect();
                        *inner.borrow_mut() = walked;
                    }
                }
                shallow
            }
            Value::Map(_) => {
                let shallow = transform_map(value, target, source);
                self.visited.insert(id, shallow.clone());
                if self.descend(depth) {
                    if let Value::Map(inner) = &shallow {
                        let snapshot: Vec<(Value, Value)> = inner.borrow().clone();
                        let walked: Vec<(Value, Value)> = snapshot
                            .into_iter()
                            .map(|(key, item)| {
                                // Keys were finalized by the map transform
                                // and are never walked further.
                                if item.is_container() {
                                    let walked = self.walk(&item, depth + 1);
                                    (key, walked)
                                } else {
                                    (key, item)
                                }
                            })
                            .collect();
                        *inner.borrow_mut() = walked;
                    }
                }
                shallow
            }
            Value::Set(original) => {
                // Set elements are never key-transformed, only recursed into.
                let shallow = Value::Set(Rc::new(RefCell::new(original.borrow().clone())));
                self.visited.insert(id, shallow.clone());
                if self.descend(depth) {
                    if let Value::Set(inner) = &shallow {
                        let snapshot: Vec<Value> = inner.borrow().clone();
                        let mut rebuilt: Vec<Value> = Vec::with_capacity(snapshot.len());
                        for item in snapshot {
                            let next = if item.is_container() {
                                self.walk(&item, depth + 1)
                            } else {
                                item
                            };
                            push_unique(&mut rebuilt, next);
                        }
                        *inner.borrow_mut() = rebuilt;
                    }
                }
                shallow
            }
            Value::Object(_) => {
                let shallow = transform_object(value, target, source);
                self.visited.insert(id, shallow.clone());
                if self.descend(depth) {
                    if let Value::Object(inner) = &shallow {
                        let snapshot: Vec<(String, Value)> = inner.borrow().clone();
                        let walked: Vec<(String, Value)> = snapshot
                            .into_iter()
                            .map(|(key, item)| {
                                if item.is_container() {
                                    let walked = self.walk(&item, depth + 1);
                                    (key, walked)
                                } else {
                                    (key, item)
                                }
                            })
                            .collect();
                        *inner.borrow_mut() = walked;
                    }
                }
                shallow
            }
            // Primitives were handled by the ref_id check above.
            _ => value.clone(),
        }
    }
}
