use super::dto::CafeForm;
use crate::domain::{
    cafe::{
        entity::{Cafe, CafeDetail},
        repository::CafeRepository,
    },
    city::{entity::City, repository::CityRepository},
    errors::{DomainError, FieldErrors},
};
use std::sync::Arc;
use validator::Validate;

pub struct CafeUseCase {
    cafes: Arc<dyn CafeRepository>,
    cities: Arc<dyn CityRepository>,
}

impl CafeUseCase {
    pub fn new(cafes: Arc<dyn CafeRepository>, cities: Arc<dyn CityRepository>) -> Self {
        Self { cafes, cities }
    }

    pub async fn list_cafes(&self) -> Result<Vec<Cafe>, DomainError> {
        self.cafes.find_all().await
    }

    pub async fn get_cafe(&self, id: i32) -> Result<CafeDetail, DomainError> {
        self.cafes
            .find_detail(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("cafe {}", id)))
    }

    /// Cities offered in the add/edit drop-down.
    pub async fn city_choices(&self) -> Result<Vec<City>, DomainError> {
        self.cities.find_all().await
    }

    pub async fn create_cafe(&self, form: CafeForm) -> Result<Cafe, DomainError> {
        self.check(&form).await?;
        self.cafes.create(&form.into_fields()).await
    }

    pub async fn update_cafe(&self, id: i32, form: CafeForm) -> Result<Cafe, DomainError> {
        if self.cafes.find_by_id(id).await?.is_none() {
            return Err(DomainError::NotFound(format!("cafe {}", id)));
        }
        self.check(&form).await?;
        self.cafes.update(id, &form.into_fields()).await
    }

    async fn check(&self, form: &CafeForm) -> Result<(), DomainError> {
        let mut errors = form
            .validate()
            .err()
            .map(FieldErrors::from)
            .unwrap_or_default();

        if !form.city_code.is_empty() && self.cities.find_by_code(&form.city_code).await?.is_none()
        {
            errors.add("city_code", "Not a valid choice.");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Invalid(errors))
        }
    }
}
