//! WASM bindings for the roster assignment engine.
//!
//! A browser page keeps one [`RosterSession`] for the lifetime of the page:
//! it fetches the catalog JSON once, constructs the session, and calls the
//! mutation methods from its click/drop/input handlers. Reports come back as
//! JSON strings for the page to render.

use roster_engine::{Catalog, CatalogOptions, Region, RosterError, Session, TeacherId};
use wasm_bindgen::prelude::*;

fn to_js(err: RosterError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
pub struct RosterSession {
    inner: Session,
}

#[wasm_bindgen]
impl RosterSession {
    /// Load the catalog and start with one default teacher.
    #[wasm_bindgen(constructor)]
    pub fn new(catalog_json: &str, reference_year: i32) -> Result<RosterSession, JsValue> {
        let options = CatalogOptions { reference_year };
        let catalog = Catalog::from_json_str(catalog_json, &options).map_err(to_js)?;
        Ok(Self {
            inner: Session::new(catalog),
        })
    }

    #[wasm_bindgen(js_name = addTeacher)]
    pub fn add_teacher(&mut self) -> u32 {
        self.inner.registry_mut().add_teacher().get()
    }

    /// Call only after the user confirmed the removal.
    #[wasm_bindgen(js_name = removeTeacher)]
    pub fn remove_teacher(&mut self, id: u32) -> bool {
        self.inner
            .registry_mut()
            .remove_teacher(TeacherId::from(id))
            .is_some()
    }

    #[wasm_bindgen(js_name = renameTeacher)]
    pub fn rename_teacher(&mut self, id: u32, name: &str) -> bool {
        self.inner
            .registry_mut()
            .rename_teacher(TeacherId::from(id), name)
    }

    /// Throws with a user-facing message if the school is unknown or taken.
    #[wasm_bindgen(js_name = assignSchool)]
    pub fn assign_school(&mut self, id: u32, school: &str) -> Result<bool, JsValue> {
        self.inner
            .assign(TeacherId::from(id), school)
            .map_err(to_js)
    }

    #[wasm_bindgen(js_name = unassignSchool)]
    pub fn unassign_school(&mut self, id: u32, school: &str) -> bool {
        self.inner.unassign(TeacherId::from(id), school)
    }

    #[wasm_bindgen(js_name = isAssigned)]
    pub fn is_assigned(&self, school: &str) -> bool {
        self.inner.registry().is_assigned(school)
    }

    #[wasm_bindgen(js_name = unassignedCount)]
    pub fn unassigned_count(&self) -> usize {
        self.inner.unassigned_count()
    }

    /// One teacher's report as JSON, or `undefined` for an unknown id.
    pub fn report(&self, id: u32) -> Result<Option<String>, JsValue> {
        self.inner
            .registry()
            .report(TeacherId::from(id))
            .map(|r| to_json(&r))
            .transpose()
    }

    /// All teachers' reports as a JSON array, in display order.
    pub fn reports(&self) -> Result<String, JsValue> {
        to_json(&self.inner.reports())
    }

    /// Schools of one region with their assigned flag, as JSON.
    pub fn available(&self, region: &str) -> Result<String, JsValue> {
        let region = Region::from_key(region)
            .ok_or_else(|| JsValue::from_str(&format!("unknown region '{region}'")))?;
        to_json(&self.inner.available(region))
    }
}
