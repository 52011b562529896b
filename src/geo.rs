//! Geodistance utility and nearby facility search
//!
//! The geocoding service is a Nominatim-compatible `/search` endpoint
//! (LocationIQ when an API key is configured). Results are filtered to the
//! requested radius and sorted by great-circle distance.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, warn};

use crate::config::GeocoderConfig;
use crate::error::AssessmentError;
use crate::Result;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Kilometres per degree of latitude, used to size the search viewbox.
const KM_PER_DEGREE: f64 = 111.0;

/// Great-circle distance in kilometres (haversine).
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

#[derive(Debug, Clone, Deserialize)]
pub struct NearbyQuery {
    pub keyword: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(default = "default_radius")]
    pub radius_km: f64,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_radius() -> f64 {
    5.0
}

fn default_limit() -> u32 {
    10
}

impl NearbyQuery {
    pub fn validate(&self) -> Result<()> {
        if self.keyword.trim().is_empty() {
            return Err(AssessmentError::validation("Please enter a search keyword."));
        }
        if !(-90.0..=90.0).contains(&self.lat) || !(-180.0..=180.0).contains(&self.lon) {
            return Err(AssessmentError::validation("Latitude or longitude is out of range."));
        }
        if !(self.radius_km > 0.0) {
            return Err(AssessmentError::validation("Search radius must be positive."));
        }
        if self.limit == 0 {
            return Err(AssessmentError::validation("Result limit must be positive."));
        }
        Ok(())
    }

    /// `lon_min,lat_min,lon_max,lat_max` around the query point.
    pub fn viewbox(&self) -> String {
        let d_lat = self.radius_km / KM_PER_DEGREE;
        let cos_lat = self.lat.to_radians().cos().abs().max(0.01);
        let d_lon = self.radius_km / (KM_PER_DEGREE * cos_lat);

        format!(
            "{:.6},{:.6},{:.6},{:.6}",
            self.lon - d_lon,
            self.lat - d_lat,
            self.lon + d_lon,
            self.lat + d_lat
        )
    }
}

/// Raw geocoding hit. Coordinates arrive as strings.
#[derive(Debug, Clone, Deserialize)]
pub struct Place {
    pub display_name: String,
    pub lat: String,
    pub lon: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NearbyPlace {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub distance_km: f64,
}

/// Drop unparseable or out-of-radius places, nearest first.
pub fn filter_and_sort(query: &NearbyQuery, places: Vec<Place>) -> Vec<NearbyPlace> {
    let mut nearby: Vec<NearbyPlace> = places
        .into_iter()
        .filter_map(|place| {
            let lat: f64 = place.lat.trim().parse().ok()?;
            let lon: f64 = place.lon.trim().parse().ok()?;
            let distance_km = haversine_km(query.lat, query.lon, lat, lon);
            (distance_km <= query.radius_km).then(|| NearbyPlace {
                name: place.display_name,
                lat,
                lon,
                distance_km,
            })
        })
        .collect();

    nearby.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    nearby
}

/// Seam over the geocoding service.
#[async_trait]
pub trait PlaceSearch: Send + Sync {
    async fn search(&self, query: &NearbyQuery) -> Result<Vec<Place>>;
}

pub struct GeocoderClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl GeocoderClient {
    pub fn new(config: &GeocoderConfig) -> Result<Self> {
        let client = Client::builder()
            .pool_idle_timeout(Duration::from_secs(60))
            .pool_max_idle_per_host(8)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    fn params(&self, query: &NearbyQuery) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("q", query.keyword.trim().to_string()),
            ("format", "json".to_string()),
            ("limit", query.limit.to_string()),
            ("viewbox", query.viewbox()),
            ("bounded", "1".to_string()),
            ("dedupe", "1".to_string()),
        ];
        if let Some(key) = &self.api_key {
            params.push(("key", key.clone()));
        }
        params
    }
}

#[async_trait]
impl PlaceSearch for GeocoderClient {
    async fn search(&self, query: &NearbyQuery) -> Result<Vec<Place>> {
        let url = format!("{}/search", self.base_url);

        info!(keyword = %query.keyword, radius_km = query.radius_km, "Searching geocoder");

        let response = self
            .client
            .get(&url)
            .query(&self.params(query))
            .send()
            .await
            .map_err(|e| AssessmentError::Upstream(format!("Geocoding request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, "Geocoder returned an error");
            return Err(AssessmentError::Upstream(format!(
                "Geocoding service returned {}: {}",
                status,
                body.trim()
            )));
        }

        let places: Vec<Place> = response
            .json()
            .await
            .map_err(|e| AssessmentError::Upstream(format!("Invalid geocoding response: {}", e)))?;

        Ok(places)
    }
}

/// Search, then keep places inside the radius, nearest first.
pub async fn find_nearby(search: &dyn PlaceSearch, query: &NearbyQuery) -> Result<Vec<NearbyPlace>> {
    query.validate()?;
    let places = search.search(query).await?;
    let total = places.len();
    let nearby = filter_and_sort(query, places);
    info!(total, kept = nearby.len(), "Nearby search complete");
    Ok(nearby)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(lat: f64, lon: f64, radius_km: f64) -> NearbyQuery {
        NearbyQuery {
            keyword: "hospital".to_string(),
            lat,
            lon,
            radius_km,
            limit: 10,
        }
    }

    fn place(name: &str, lat: f64, lon: f64) -> Place {
        Place {
            display_name: name.to_string(),
            lat: lat.to_string(),
            lon: lon.to_string(),
        }
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        assert_eq!(haversine_km(12.9716, 77.5946, 12.9716, 77.5946), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let ab = haversine_km(28.6139, 77.2090, 19.0760, 72.8777);
        let ba = haversine_km(19.0760, 72.8777, 28.6139, 77.2090);
        assert!((ab - ba).abs() < 1e-9);
        // Delhi to Mumbai is roughly 1150 km
        assert!((1100.0..1200.0).contains(&ab));
    }

    #[test]
    fn test_one_degree_of_latitude() {
        let d = haversine_km(0.0, 0.0, 1.0, 0.0);
        assert!((d - 111.19).abs() < 0.01);
    }

    #[test]
    fn test_filter_and_sort() {
        let q = query(12.97, 77.59, 5.0);
        let places = vec![
            place("far", 13.20, 77.59),
            place("near", 12.971, 77.591),
            place("middle", 12.99, 77.59),
            Place {
                display_name: "broken".to_string(),
                lat: "n/a".to_string(),
                lon: "77.59".to_string(),
            },
        ];

        let nearby = filter_and_sort(&q, places);
        let names: Vec<&str> = nearby.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["near", "middle"]);
        assert!(nearby[0].distance_km <= nearby[1].distance_km);
    }

    #[test]
    fn test_viewbox_contains_point() {
        let q = query(12.97, 77.59, 11.1);
        let parts: Vec<f64> = q.viewbox().split(',').map(|v| v.parse().unwrap()).collect();
        assert!(parts[0] < q.lon && q.lon < parts[2]);
        assert!(parts[1] < q.lat && q.lat < parts[3]);
        assert!((parts[3] - parts[1] - 0.2).abs() < 1e-3);
    }

    #[test]
    fn test_validation() {
        assert!(query(12.0, 77.0, 5.0).validate().is_ok());
        assert!(query(95.0, 77.0, 5.0).validate().is_err());
        assert!(query(12.0, 77.0, 0.0).validate().is_err());
        let mut blank = query(12.0, 77.0, 5.0);
        blank.keyword = "  ".to_string();
        assert!(blank.validate().is_err());
    }

    #[test]
    fn test_query_params_include_key_when_configured() {
        let client = GeocoderClient::new(&GeocoderConfig {
            base_url: "https://example.test/".to_string(),
            api_key: Some("secret".to_string()),
            user_agent: "test".to_string(),
        })
        .unwrap();

        let params = client.params(&query(12.0, 77.0, 5.0));
        let keys: Vec<&str> = params.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["q", "format", "limit", "viewbox", "bounded", "dedupe", "key"]);
        assert_eq!(client.base_url, "https://example.test");
    }
}
