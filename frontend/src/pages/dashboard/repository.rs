use crate::{
    api::{Activity, ApiClient, ApiError, Asset, AssetStatus, Office},
    config::NEW_ASSET_WINDOW_DAYS,
};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::rc::Rc;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_assets: usize,
    pub active_offices: usize,
    pub in_repair: usize,
    pub new_assets: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfficeWithCount {
    pub id: String,
    pub name: String,
    pub asset_count: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub stats: DashboardStats,
    pub offices: Vec<OfficeWithCount>,
    pub activities: Vec<Activity>,
}

/// Assets without `createdAt` count as new.
pub fn build_stats(assets: &[Asset], offices: &[Office], now: DateTime<Utc>) -> DashboardStats {
    let cutoff = now - Duration::days(NEW_ASSET_WINDOW_DAYS);
    DashboardStats {
        total_assets: assets.len(),
        active_offices: offices.len(),
        in_repair: assets
            .iter()
            .filter(|a| a.status == AssetStatus::InRepair)
            .count(),
        new_assets: assets
            .iter()
            .filter(|a| a.created_at.map_or(true, |created| created >= cutoff))
            .count(),
    }
}

pub fn offices_with_counts(assets: &[Asset], offices: &[Office]) -> Vec<OfficeWithCount> {
    offices
        .iter()
        .map(|office| OfficeWithCount {
            id: office.id.clone(),
            name: office.name.clone(),
            asset_count: assets
                .iter()
                .filter(|a| a.owning_office_id() == Some(office.id.as_str()))
                .count(),
        })
        .collect()
}

#[derive(Clone)]
pub struct DashboardRepository {
    client: Rc<ApiClient>,
}

impl DashboardRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    /// Any failing request fails the whole dashboard.
    pub async fn fetch_dashboard(&self, now: DateTime<Utc>) -> Result<DashboardData, ApiError> {
        let assets = self.client.list_assets(None).await?;
        let offices = self.client.list_offices().await?;
        let activities = self.client.list_activities().await?;
        Ok(DashboardData {
            stats: build_stats(&assets, &offices, now),
            offices: offices_with_counts(&assets, &offices),
            activities,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 31, 12, 0, 0).unwrap()
    }

    fn asset(id: &str, office: &str, status: AssetStatus, days_old: Option<i64>) -> Asset {
        Asset {
            id: id.into(),
            name: format!("Asset {}", id),
            serial: String::new(),
            inventory: String::new(),
            status,
            office_id: Some(office.into()),
            office: None,
            created_at: days_old.map(|d| now() - Duration::days(d)),
        }
    }

    fn office(id: &str, name: &str) -> Office {
        Office {
            id: id.into(),
            name: name.into(),
        }
    }

    #[test]
    fn stats_count_repairs_and_recent_assets() {
        let assets = vec![
            asset("a1", "o1", AssetStatus::Active, Some(5)),
            asset("a2", "o1", AssetStatus::InRepair, Some(30)),
            asset("a3", "o2", AssetStatus::InRepair, Some(31)),
            asset("a4", "o2", AssetStatus::Inactive, None),
        ];
        let offices = vec![office("o1", "Lima"), office("o2", "Quito"), office("o3", "Cusco")];

        let stats = build_stats(&assets, &offices, now());
        assert_eq!(
            stats,
            DashboardStats {
                total_assets: 4,
                active_offices: 3,
                in_repair: 2,
                new_assets: 3,
            }
        );
    }

    #[test]
    fn dashboard_payload_serializes_for_resource_transfer() {
        let data = DashboardData {
            stats: DashboardStats {
                total_assets: 1,
                active_offices: 1,
                in_repair: 0,
                new_assets: 1,
            },
            offices: vec![OfficeWithCount {
                id: "o1".into(),
                name: "Lima".into(),
                asset_count: 1,
            }],
            activities: vec![Activity {
                id: "act-1".into(),
                action: crate::api::ActivityAction::Create,
                asset_name: "Laptop".into(),
                from_office: None,
                to_office: Some("Lima".into()),
                timestamp: now(),
            }],
        };
        let encoded = serde_json::to_string(&data).unwrap();
        let decoded: DashboardData = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn office_counts_include_empty_offices() {
        let assets = vec![
            asset("a1", "o1", AssetStatus::Active, None),
            asset("a2", "o1", AssetStatus::Active, None),
            asset("a3", "o2", AssetStatus::Active, None),
        ];
        let offices = vec![office("o1", "Lima"), office("o2", "Quito"), office("o3", "Cusco")];
        let counts: Vec<usize> = offices_with_counts(&assets, &offices)
            .into_iter()
            .map(|o| o.asset_count)
            .collect();
        assert_eq!(counts, vec![2, 1, 0]);
    }
}
