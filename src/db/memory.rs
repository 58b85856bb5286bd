//! In-Memory Catalog
//!
//! `CatalogStore` over plain vectors. Serves the `memory` backend (seeded
//! with [`super::seed`]) and every test that needs a store without PostgreSQL.
//! Applies the same ordering and aggregation rules as the SQL queries.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::models::{EmiPlan, Product, ProductSummary, Variant};
use super::repository::{CatalogError, CatalogResult, CatalogStore, Entity};
use super::seed;

#[derive(Default)]
struct CatalogData {
    products: Vec<Product>,
    variants: Vec<Variant>,
    emi_plans: Vec<EmiPlan>,
}

#[derive(Default)]
pub struct InMemoryCatalog {
    data: RwLock<CatalogData>,
    /// true면 모든 조회가 `StoreUnavailable` (장애 시뮬레이션)
    unavailable: AtomicBool,
}

impl InMemoryCatalog {
    /// Empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog loaded with the sample data set
    pub fn seeded() -> Self {
        Self {
            data: RwLock::new(CatalogData {
                products: seed::products(),
                variants: seed::variants(),
                emi_plans: seed::emi_plans(),
            }),
            unavailable: AtomicBool::new(false),
        }
    }

    pub fn add_product(&self, product: Product) -> CatalogResult<()> {
        self.write()?.products.push(product);
        Ok(())
    }

    /// Rejects variants whose parent product does not exist
    pub fn add_variant(&self, variant: Variant) -> CatalogResult<()> {
        let mut data = self.write()?;
        if !data.products.iter().any(|p| p.id == variant.product_id) {
            return Err(CatalogError::NotFound(Entity::Product));
        }
        data.variants.push(variant);
        Ok(())
    }

    pub fn add_emi_plan(&self, plan: EmiPlan) -> CatalogResult<()> {
        self.write()?.emi_plans.push(plan);
        Ok(())
    }

    /// Simulates an unreachable store
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn read(&self) -> CatalogResult<std::sync::RwLockReadGuard<'_, CatalogData>> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(CatalogError::StoreUnavailable("in-memory catalog offline".to_string()));
        }
        self.data
            .read()
            .map_err(|_| CatalogError::StoreUnavailable("catalog lock poisoned".to_string()))
    }

    fn write(&self) -> CatalogResult<std::sync::RwLockWriteGuard<'_, CatalogData>> {
        self.data
            .write()
            .map_err(|_| CatalogError::StoreUnavailable("catalog lock poisoned".to_string()))
    }
}

fn summarize(product: &Product, variants: &[Variant]) -> ProductSummary {
    let own: Vec<&Variant> = variants
        .iter()
        .filter(|v| v.product_id == product.id)
        .collect();

    let image_url = own
        .iter()
        .min_by_key(|v| v.id)
        .and_then(|v| v.image_url.clone());

    ProductSummary {
        id: product.id,
        name: product.name.clone(),
        slug: product.slug.clone(),
        description: product.description.clone(),
        category: product.category.clone(),
        brand: product.brand.clone(),
        min_mrp: own.iter().map(|v| v.mrp).min(),
        min_price: own.iter().map(|v| v.price).min(),
        max_mrp: own.iter().map(|v| v.mrp).max(),
        max_price: own.iter().map(|v| v.price).max(),
        image_url,
    }
}

#[async_trait]
impl CatalogStore for InMemoryCatalog {
    async fn list_products(&self) -> CatalogResult<Vec<ProductSummary>> {
        let data = self.read()?;

        let mut summaries: Vec<ProductSummary> = data
            .products
            .iter()
            .map(|product| summarize(product, &data.variants))
            .collect();
        summaries.sort_by_key(|s| s.id);

        Ok(summaries)
    }

    async fn get_product_by_slug(&self, slug: &str) -> CatalogResult<Product> {
        self.read()?
            .products
            .iter()
            .find(|p| p.slug == slug)
            .cloned()
            .ok_or(CatalogError::NotFound(Entity::Product))
    }

    async fn list_variants_for_product(&self, product_id: i32) -> CatalogResult<Vec<Variant>> {
        let mut variants: Vec<Variant> = self
            .read()?
            .variants
            .iter()
            .filter(|v| v.product_id == product_id)
            .cloned()
            .collect();
        variants.sort_by(|a, b| a.price.cmp(&b.price).then(a.id.cmp(&b.id)));

        Ok(variants)
    }

    async fn list_emi_plans(&self) -> CatalogResult<Vec<EmiPlan>> {
        let mut plans = self.read()?.emi_plans.clone();
        plans.sort_by(|a, b| {
            a.tenure_months
                .cmp(&b.tenure_months)
                .then(a.interest_rate.cmp(&b.interest_rate))
                .then(a.id.cmp(&b.id))
        });

        Ok(plans)
    }

    async fn get_variant_price(&self, variant_id: i32) -> CatalogResult<Decimal> {
        self.read()?
            .variants
            .iter()
            .find(|v| v.id == variant_id)
            .map(|v| v.price)
            .ok_or(CatalogError::NotFound(Entity::Variant))
    }

    async fn get_variant(&self, variant_id: i32) -> CatalogResult<Variant> {
        self.read()?
            .variants
            .iter()
            .find(|v| v.id == variant_id)
            .cloned()
            .ok_or(CatalogError::NotFound(Entity::Variant))
    }

    async fn get_emi_plan(&self, plan_id: i32) -> CatalogResult<EmiPlan> {
        self.read()?
            .emi_plans
            .iter()
            .find(|p| p.id == plan_id)
            .cloned()
            .ok_or(CatalogError::NotFound(Entity::EmiPlan))
    }

    async fn health_check(&self) -> CatalogResult<()> {
        self.read().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    fn bare_product(id: i32, slug: &str) -> Product {
        Product {
            id,
            name: slug.to_string(),
            slug: slug.to_string(),
            description: None,
            category: None,
            brand: None,
            created_at: None,
        }
    }

    #[tokio::test]
    async fn test_list_products_aggregates_prices() {
        let catalog = InMemoryCatalog::seeded();
        let products = catalog.list_products().await.unwrap();

        assert_eq!(products.len(), 3);
        assert_eq!(products.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2, 3]);

        let iphone = &products[0];
        assert_eq!(iphone.min_price, Some(Decimal::from(124900)));
        assert_eq!(iphone.max_price, Some(Decimal::from(144900)));
        assert_eq!(iphone.min_mrp, Some(Decimal::from(134900)));
        assert_eq!(iphone.max_mrp, Some(Decimal::from(154900)));
    }

    #[tokio::test]
    async fn test_product_without_variants_has_empty_aggregates() {
        let catalog = InMemoryCatalog::seeded();
        assert_ok!(catalog.add_product(bare_product(4, "coming-soon")));

        let products = catalog.list_products().await.unwrap();
        let empty = products.iter().find(|p| p.slug == "coming-soon").unwrap();

        assert_eq!(empty.min_mrp, None);
        assert_eq!(empty.min_price, None);
        assert_eq!(empty.max_mrp, None);
        assert_eq!(empty.max_price, None);
        assert_eq!(empty.image_url, None);
    }

    #[tokio::test]
    async fn test_image_comes_from_lowest_variant_id() {
        let catalog = InMemoryCatalog::new();
        assert_ok!(catalog.add_product(bare_product(1, "phone")));

        let mut later = seed::variants()[0].clone();
        later.id = 20;
        later.product_id = 1;
        later.image_url = Some("later.png".to_string());
        let mut earlier = later.clone();
        earlier.id = 7;
        earlier.image_url = Some("earlier.png".to_string());

        // insertion order must not matter
        assert_ok!(catalog.add_variant(later));
        assert_ok!(catalog.add_variant(earlier));

        let products = catalog.list_products().await.unwrap();
        assert_eq!(products[0].image_url.as_deref(), Some("earlier.png"));
    }

    #[tokio::test]
    async fn test_slug_lookup_is_case_sensitive() {
        let catalog = InMemoryCatalog::seeded();

        assert_ok!(catalog.get_product_by_slug("oneplus-12").await);
        let err = catalog.get_product_by_slug("OnePlus-12").await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(Entity::Product)));
    }

    #[tokio::test]
    async fn test_variants_sorted_by_price() {
        let catalog = InMemoryCatalog::seeded();
        let variants = catalog.list_variants_for_product(2).await.unwrap();

        assert_eq!(variants.len(), 3);
        assert!(variants.windows(2).all(|w| w[0].price <= w[1].price));
        assert_eq!(variants.last().unwrap().id, 7);
    }

    #[tokio::test]
    async fn test_plans_sorted_by_tenure_then_rate() {
        let catalog = InMemoryCatalog::seeded();
        let mut cheaper = seed::emi_plans()[5].clone();
        cheaper.id = 99;
        cheaper.interest_rate = Decimal::from(9);
        assert_ok!(catalog.add_emi_plan(cheaper));

        let plans = catalog.list_emi_plans().await.unwrap();
        let keys: Vec<(i32, Decimal)> = plans
            .iter()
            .map(|p| (p.tenure_months, p.interest_rate))
            .collect();

        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
        assert_eq!(plans[5].id, 99);
        assert_eq!(plans[6].id, 6);
    }

    #[tokio::test]
    async fn test_variant_lookups() {
        let catalog = InMemoryCatalog::seeded();

        assert_eq!(catalog.get_variant_price(8).await.unwrap(), Decimal::from(59999));
        assert_eq!(catalog.get_variant(8).await.unwrap().name, "256GB - Silky Black");
        assert!(matches!(
            catalog.get_variant_price(404).await,
            Err(CatalogError::NotFound(Entity::Variant))
        ));
        assert!(matches!(
            catalog.get_emi_plan(404).await,
            Err(CatalogError::NotFound(Entity::EmiPlan))
        ));
    }

    #[tokio::test]
    async fn test_orphan_variant_rejected() {
        let catalog = InMemoryCatalog::new();
        assert_err!(catalog.add_variant(seed::variants()[0].clone()));
    }

    #[tokio::test]
    async fn test_unavailable_store() {
        let catalog = InMemoryCatalog::seeded();
        catalog.set_unavailable(true);

        assert!(matches!(
            catalog.list_products().await,
            Err(CatalogError::StoreUnavailable(_))
        ));
        assert_err!(catalog.health_check().await);

        catalog.set_unavailable(false);
        assert_ok!(catalog.health_check().await);
    }
}
