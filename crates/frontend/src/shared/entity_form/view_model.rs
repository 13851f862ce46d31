use std::collections::BTreeMap;
use std::marker::PhantomData;

use super::model;
use crate::shared::flash::Flash;
use contracts::domain::common::{EntityMetadata, SelectOption};
use contracts::shared::entity_form::{clip_to_max, field, EntityForm, FieldValues};
use contracts::shared::form_settings::{FieldKind, FormMode, REDIRECT_DELAY_MS};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

/// ViewModel of the generic create/edit page
///
/// - `values` holds the raw text of every configured field
/// - select fields get their options in `options`, keyed by field
/// - in edit mode `record_id`/`metadata` describe the loaded record
pub struct EntityFormViewModel<F: EntityForm> {
    pub mode: FormMode,
    pub values: RwSignal<FieldValues>,
    pub options: RwSignal<BTreeMap<&'static str, Vec<SelectOption>>>,
    pub record_id: RwSignal<Option<String>>,
    pub metadata: RwSignal<Option<EntityMetadata>>,
    pub is_loading: RwSignal<bool>,
    pub is_submitting: RwSignal<bool>,
    pub flash: Flash,
    _form: PhantomData<fn() -> F>,
}

impl<F: EntityForm> Clone for EntityFormViewModel<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: EntityForm> Copy for EntityFormViewModel<F> {}

impl<F: EntityForm> EntityFormViewModel<F> {
    pub fn new(mode: FormMode) -> Self {
        Self {
            mode,
            values: RwSignal::new(F::empty_values()),
            options: RwSignal::new(BTreeMap::new()),
            record_id: RwSignal::new(None),
            metadata: RwSignal::new(None),
            is_loading: RwSignal::new(false),
            is_submitting: RwSignal::new(false),
            flash: Flash::new(),
            _form: PhantomData,
        }
    }

    pub fn value(&self, key: &'static str) -> String {
        self.values.with(|v| field(v, key).to_string())
    }

    pub fn value_len(&self, key: &'static str) -> usize {
        self.values.with(|v| field(v, key).chars().count())
    }

    /// Store a field edit, clipped to the field's maximum length
    pub fn set_value(&self, key: &'static str, raw: String) {
        let max_len = F::CONFIG.field(key).and_then(|f| f.max_len);
        self.values.update(|v| {
            v.insert(key, clip_to_max(&raw, max_len));
        });
    }

    pub fn field_options(&self, key: &'static str) -> Vec<SelectOption> {
        self.options
            .with(|o| o.get(key).cloned().unwrap_or_default())
    }

    /// Load select options first, then (in edit mode) the record itself,
    /// so a loaded parent reference always finds its option.
    pub fn load_command(&self, id: Option<String>) {
        let vm = *self;
        vm.is_loading.set(true);

        wasm_bindgen_futures::spawn_local(async move {
            for spec in F::CONFIG.fields {
                let FieldKind::Select(source) = spec.kind else {
                    continue;
                };
                match model::fetch_options(source).await {
                    Ok(list) => vm.options.update(|o| {
                        o.insert(spec.key, list);
                    }),
                    Err(e) => vm.flash.error(e.load_message(source.noun())),
                }
            }

            if vm.mode == FormMode::Edit {
                vm.load_record(id).await;
            }
            vm.is_loading.set(false);
        });
    }

    async fn load_record(&self, id: Option<String>) {
        let Some(id) = id.filter(|id| !id.trim().is_empty()) else {
            self.flash.error(F::CONFIG.missing_id_message());
            return;
        };

        match model::fetch_record::<F>(&id).await {
            Ok(record) => {
                log::debug!("loaded {} {}", F::CONFIG.entity, F::record_id(&record));
                self.values.set(F::field_values(&record));
                self.metadata.set(Some(F::metadata(&record).clone()));
                self.record_id.set(Some(F::record_id(&record).to_string()));
            }
            Err(e) => self
                .flash
                .error(e.user_message(&F::CONFIG.not_found_fallback())),
        }
    }

    /// Validate, submit, and on success go back home after a short pause
    pub fn save_command(&self, on_saved: Callback<()>) {
        if self.is_submitting.get_untracked() {
            return;
        }
        if self.mode == FormMode::Edit && self.record_id.get_untracked().is_none() {
            self.flash.error(F::CONFIG.missing_id_message());
            return;
        }

        let payload = match self.values.with_untracked(|v| F::build_payload(v)) {
            Ok(payload) => payload,
            Err(e) => {
                self.flash.error(e.message());
                return;
            }
        };

        let vm = *self;
        vm.flash.clear();
        vm.is_submitting.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let id = vm.record_id.get_untracked();
            match model::save::<F>(vm.mode, id, &payload).await {
                Ok(()) => {
                    vm.flash.success(F::CONFIG.success_message(vm.mode));
                    if vm.mode == FormMode::Create {
                        vm.values.set(F::empty_values());
                    }
                    TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                    on_saved.run(());
                }
                Err(e) => {
                    vm.flash
                        .error(e.user_message(&F::CONFIG.failure_fallback(vm.mode)));
                    vm.is_submitting.set(false);
                }
            }
        });
    }
}
