//! Catalog handlers: product creation, listing, search and pagination.

use axum::extract::{Path, Query, State};
use serde::Serialize;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{NewProduct, ProductResponse};
use crate::errors::AppResult;
use crate::types::{Envelope, PageParams};

/// Payload of the product listings
#[derive(Debug, Serialize)]
pub struct ProductsPayload {
    pub products: Vec<ProductResponse>,
}

/// Payload of the paginated product listing
#[derive(Debug, Serialize)]
pub struct PaginatedProductsPayload {
    pub products: Vec<ProductResponse>,
    /// Count of products across all pages
    pub total: usize,
}

fn to_responses(products: Vec<crate::domain::Product>) -> Vec<ProductResponse> {
    products.into_iter().map(Into::into).collect()
}

/// Add a product; free-form fields are stored alongside the typed core
#[utoipa::path(
    post,
    path = "/shri_add_product",
    tag = "Products",
    responses(
        (status = 200, description = "Product added")
    )
)]
pub async fn add_product(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<NewProduct>,
) -> AppResult<Envelope> {
    state.catalog_service.add(payload).await?;
    Ok(Envelope::success("Product added"))
}

/// List every product
#[utoipa::path(
    get,
    path = "/shri_view_products",
    tag = "Products",
    responses(
        (status = 200, description = "All products")
    )
)]
pub async fn view_products(
    State(state): State<AppState>,
) -> AppResult<Envelope<ProductsPayload>> {
    let products = state.catalog_service.list().await?;
    Ok(Envelope::with_payload(ProductsPayload {
        products: to_responses(products),
    }))
}

/// List products in a category
#[utoipa::path(
    get,
    path = "/shri_view_products_by_category/{category}",
    tag = "Products",
    params(("category" = String, Path, description = "Category to filter by")),
    responses(
        (status = 200, description = "Products in the category")
    )
)]
pub async fn view_products_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> AppResult<Envelope<ProductsPayload>> {
    let products = state.catalog_service.by_category(&category).await?;
    Ok(Envelope::with_payload(ProductsPayload {
        products: to_responses(products),
    }))
}

/// Prefix search on product names
#[utoipa::path(
    get,
    path = "/shri_search_products/{key}",
    tag = "Products",
    params(("key" = String, Path, description = "Name prefix to search for")),
    responses(
        (status = 200, description = "Matching products")
    )
)]
pub async fn search_products(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<Envelope<ProductsPayload>> {
    let products = state.catalog_service.search(&key).await?;
    Ok(Envelope::with_payload(ProductsPayload {
        products: to_responses(products),
    }))
}

/// Paginated product listing.
///
/// Fetches the full catalog and slices the requested page in memory;
/// `total` counts every product, not just the returned page.
#[utoipa::path(
    get,
    path = "/shri_view_products_paginated",
    tag = "Products",
    params(
        ("page" = Option<usize>, Query, description = "1-based page number, default 1"),
        ("limit" = Option<usize>, Query, description = "Page size, default 10")
    ),
    responses(
        (status = 200, description = "One page of products plus the total count")
    )
)]
pub async fn view_products_paginated(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Envelope<PaginatedProductsPayload>> {
    let all = state.catalog_service.list().await?;
    let total = all.len();
    let page = params.slice(all);

    Ok(Envelope::with_payload(PaginatedProductsPayload {
        products: to_responses(page),
        total,
    }))
}
