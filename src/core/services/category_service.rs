use uuid::Uuid;

use crate::business::{Business, Category, CategoryDraft, CategoryOverview};
use crate::errors::{BookingError, BookingResult};

pub struct CategoryService;

impl CategoryService {
    pub fn add(business: &mut Business, draft: CategoryDraft) -> BookingResult<Uuid> {
        Self::validate_name(business, None, &draft.name)?;
        let category = Category::new(draft.name.trim(), draft.description, draft.color);
        Ok(business.add_category(category))
    }

    /// Edits a category. A rename rewrites the `category` field of
    /// every member service, so membership (and thus the derived
    /// count) is unchanged by the rename itself.
    pub fn edit(business: &mut Business, id: Uuid, draft: CategoryDraft) -> BookingResult<()> {
        Self::validate_name(business, Some(id), &draft.name)?;
        let new_name = draft.name.trim().to_string();
        let old_name = {
            let category = business
                .category_mut(id)
                .ok_or(BookingError::not_found("category", id))?;
            let old_name = std::mem::replace(&mut category.name, new_name.clone());
            category.description = draft.description;
            category.color = draft.color;
            old_name
        };

        if old_name != new_name {
            let mut renamed = 0usize;
            for service in business
                .services
                .iter_mut()
                .filter(|service| service.category == old_name)
            {
                service.category = new_name.clone();
                renamed += 1;
            }
            tracing::debug!(from = %old_name, to = %new_name, renamed, "propagated category rename");
        }
        business.touch();
        Ok(())
    }

    /// Removes an empty category. A category that still has member
    /// services is left untouched and the call reports `CategoryInUse`.
    pub fn remove(business: &mut Business, id: Uuid) -> BookingResult<Category> {
        let position = business
            .categories
            .iter()
            .position(|category| category.id == id)
            .ok_or(BookingError::not_found("category", id))?;
        let services = business.service_count(&business.categories[position].name);
        if services > 0 {
            return Err(BookingError::CategoryInUse {
                name: business.categories[position].name.clone(),
                services,
            });
        }
        let category = business.categories.remove(position);
        business.touch();
        Ok(category)
    }

    pub fn get(business: &Business, id: Uuid) -> BookingResult<&Category> {
        business
            .category(id)
            .ok_or(BookingError::not_found("category", id))
    }

    /// Lists every category with its derived service count.
    pub fn list(business: &Business) -> Vec<CategoryOverview> {
        business
            .categories
            .iter()
            .map(|category| CategoryOverview {
                category: category.clone(),
                service_count: business.service_count(&category.name),
            })
            .collect()
    }

    fn validate_name(
        business: &Business,
        exclude: Option<Uuid>,
        candidate: &str,
    ) -> BookingResult<()> {
        if candidate.trim().is_empty() {
            return Err(BookingError::invalid("category name must not be empty"));
        }
        let normalized = candidate.trim().to_ascii_lowercase();
        let duplicate = business.categories.iter().any(|category| {
            let name = category.name.trim().to_ascii_lowercase();
            name == normalized && exclude.map_or(true, |id| category.id != id)
        });
        if duplicate {
            Err(BookingError::invalid(format!(
                "category `{}` already exists",
                candidate.trim()
            )))
        } else {
            Ok(())
        }
    }
}
