use crate::api::{ApiClient, ApiError};
use crate::pages::dashboard::repository::{DashboardData, DashboardRepository};
use crate::utils::time;
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub data: Resource<(), Result<DashboardData, ApiError>>,
}

impl DashboardViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_default();
        let repository = DashboardRepository::new_with_client(Rc::new(api));

        let data = create_resource(
            || (),
            move |_| {
                let repo = repository.clone();
                async move {
                    let result = repo.fetch_dashboard(time::now()).await;
                    if let Err(err) = &result {
                        log::error!("Dashboard fetch error: {}", err);
                    }
                    result
                }
            },
        );

        Self { data }
    }
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    if let Some(vm) = use_context::<DashboardViewModel>() {
        return vm;
    }
    let vm = DashboardViewModel::new();
    provide_context(vm);
    vm
}
