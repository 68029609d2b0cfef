//! Web API module for Vizygo.
//!
//! This module exposes the rental session over REST so that a browser
//! frontend can list, filter, price and book listings.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /api/catalog` - Every listing, unfiltered
//! - `GET /api/filters` - Categories, locations and price bands to filter by
//! - `GET /api/listings` - Filtered listings (optional ?category=&location=&price_band=)
//! - `GET /api/listings/{id}` - One listing with its selected tier
//! - `PUT /api/listings/{id}/tier` - Select a duration tier
//! - `POST /api/listings/{id}/book` - Confirm a booking
//! - `GET /api/stories` - Community stories with like counts
//! - `POST /api/stories` - Share a story
//! - `POST /api/stories/{id}/like` - Like a story

use std::net::SocketAddr;
use std::path::Path as FsPath;
use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::app::RentalSession;
use crate::catalog::CatalogStore;
use crate::error::{CatalogError, StoryError};
use crate::models::{
    FilterCriteria, Listing, ListingId, Story, StoryCategory, StoryId, TierKey, TierQuote,
};
use crate::services::{StoryBoard, StorySubmission};

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for the web API.
///
/// Every handler completes its transition while holding the lock.
#[derive(Clone)]
pub struct AppState {
    /// Catalog, filters and tier selections
    session: Arc<Mutex<RentalSession>>,
    /// Stories and like counts
    stories: Arc<Mutex<StoryBoard>>,
}

impl AppState {
    /// Creates a new application state around a session.
    pub fn new(session: RentalSession) -> anyhow::Result<Self> {
        let stories = StoryBoard::load_embedded()?;
        Ok(Self {
            session: Arc::new(Mutex::new(session)),
            stories: Arc::new(Mutex::new(stories)),
        })
    }

    fn session(&self) -> Result<MutexGuard<'_, RentalSession>, (StatusCode, Json<ApiError>)> {
        self.session.lock().map_err(|_| poisoned())
    }

    fn stories(&self) -> Result<MutexGuard<'_, StoryBoard>, (StatusCode, Json<ApiError>)> {
        self.stories.lock().map_err(|_| poisoned())
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Current health status (e.g., "healthy").
    pub status: String,
    /// Application version.
    pub version: String,
}

/// Unfiltered catalog.
#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    /// Every listing in catalog order.
    pub listings: Vec<Listing>,
    /// Number of listings.
    pub count: usize,
}

/// One filter choice.
#[derive(Debug, Serialize)]
pub struct FilterOption {
    /// Value to pass back as a query parameter.
    pub key: String,
    /// Display label.
    pub label: String,
}

/// Values each filter axis can take.
#[derive(Debug, Serialize)]
pub struct FiltersResponse {
    /// Vehicle categories.
    pub categories: Vec<FilterOption>,
    /// Zones, in first-seen catalog order.
    pub locations: Vec<String>,
    /// Daily price buckets.
    pub price_bands: Vec<FilterOption>,
}

/// Query parameters for listing search.
///
/// Absent, empty or `all` leaves an axis unconstrained.
#[derive(Debug, Default, Deserialize)]
pub struct ListingQuery {
    /// Category key.
    pub category: Option<String>,
    /// Exact location name.
    pub location: Option<String>,
    /// Price band key.
    pub price_band: Option<String>,
}

/// A listing with the tier currently selected for it.
#[derive(Debug, Serialize)]
pub struct ListingView {
    /// Listing fields.
    #[serde(flatten)]
    pub listing: Listing,
    /// Selected duration tier.
    pub selected_tier: TierKey,
    /// Price and distance allowance of the selected tier.
    pub quote: TierQuote,
}

impl ListingView {
    fn new(session: &RentalSession, listing: &Listing) -> Self {
        let selected_tier = session.selected_tier(listing.id);
        Self {
            listing: listing.clone(),
            selected_tier,
            quote: listing.quote(selected_tier),
        }
    }
}

/// Filtered listing response.
#[derive(Debug, Serialize)]
pub struct ListingsResponse {
    /// Matching listings in catalog order.
    pub listings: Vec<ListingView>,
    /// Number of matches.
    pub count: usize,
}

/// Tier selection request body.
#[derive(Debug, Deserialize)]
pub struct TierRequest {
    /// Tier key: daily, weekly, biweekly or monthly.
    pub tier: String,
}

/// Booking confirmation response.
#[derive(Debug, Serialize)]
pub struct BookingResponse {
    /// Booked listing.
    pub id: ListingId,
    /// Availability after booking (always false).
    pub available: bool,
    /// Confirmation message.
    pub message: String,
}

/// A story with its current like count.
#[derive(Debug, Serialize)]
pub struct StoryView {
    /// Story fields.
    #[serde(flatten)]
    pub story: Story,
    /// Current like count.
    pub likes: u32,
}

/// Story list response.
#[derive(Debug, Serialize)]
pub struct StoriesResponse {
    /// Stories in publication order.
    pub stories: Vec<StoryView>,
}

/// Story submission request body.
#[derive(Debug, Deserialize)]
pub struct CreateStoryRequest {
    /// Headline.
    pub title: String,
    /// Story body.
    pub content: String,
    /// Rider name.
    #[serde(default)]
    pub author: Option<String>,
    /// Route ridden.
    #[serde(default)]
    pub route: Option<String>,
    /// Theme key; unknown keys are filed as `other`.
    #[serde(default)]
    pub category: Option<StoryCategory>,
}

impl From<CreateStoryRequest> for StorySubmission {
    fn from(request: CreateStoryRequest) -> Self {
        Self {
            title: request.title,
            content: request.content,
            author: request.author,
            route: request.route,
            category: request.category,
        }
    }
}

/// Like response.
#[derive(Debug, Serialize)]
pub struct LikeResponse {
    /// Liked story.
    pub id: StoryId,
    /// Like count after the like.
    pub likes: u32,
}

/// API error response.
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// Error message.
    pub error: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

fn poisoned() -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiError::with_details(
            "Session state is unavailable",
            "a previous request panicked while holding the lock",
        )),
    )
}

/// Maps catalog errors to HTTP status codes.
fn catalog_error(e: &CatalogError) -> (StatusCode, Json<ApiError>) {
    let status = match e {
        CatalogError::InvalidListingId(_) => StatusCode::NOT_FOUND,
        CatalogError::AlreadyUnavailable(_) => StatusCode::CONFLICT,
        CatalogError::InvalidTierKey(_)
        | CatalogError::UnknownCategory(_)
        | CatalogError::UnknownPriceBand(_) => StatusCode::BAD_REQUEST,
        CatalogError::DuplicateListingId(_) | CatalogError::EmptyCatalog => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, Json(ApiError::new(e.to_string())))
}

fn story_error(e: &StoryError) -> (StatusCode, Json<ApiError>) {
    let status = match e {
        StoryError::UnknownStory(_) => StatusCode::NOT_FOUND,
        StoryError::EmptySubmission => StatusCode::BAD_REQUEST,
    };
    (status, Json(ApiError::new(e.to_string())))
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /health - Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /api/catalog - Every listing.
async fn get_catalog(
    State(state): State<AppState>,
) -> Result<Json<CatalogResponse>, (StatusCode, Json<ApiError>)> {
    let session = state.session()?;
    let listings = session.get_catalog().to_vec();
    Ok(Json(CatalogResponse {
        count: listings.len(),
        listings,
    }))
}

/// GET /api/filters - Filter choices derived from the catalog.
async fn get_filters(
    State(state): State<AppState>,
) -> Result<Json<FiltersResponse>, (StatusCode, Json<ApiError>)> {
    let options = state.session()?.filter_options();
    Ok(Json(FiltersResponse {
        categories: options
            .categories
            .iter()
            .map(|c| FilterOption {
                key: c.key().to_string(),
                label: c.label().to_string(),
            })
            .collect(),
        locations: options.locations,
        price_bands: options
            .price_bands
            .iter()
            .map(|b| FilterOption {
                key: b.key().to_string(),
                label: b.describe(),
            })
            .collect(),
    }))
}

/// GET /api/listings - Listings matching the query criteria.
async fn list_listings(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> Result<Json<ListingsResponse>, (StatusCode, Json<ApiError>)> {
    let criteria = FilterCriteria::parse(
        query.category.as_deref(),
        query.location.as_deref(),
        query.price_band.as_deref(),
    )
    .map_err(|e| catalog_error(&e))?;

    let session = state.session()?;
    let listings: Vec<ListingView> = session
        .get_filtered_listings(&criteria)
        .into_iter()
        .map(|listing| ListingView::new(&session, listing))
        .collect();

    tracing::debug!(?criteria, count = listings.len(), "Filtered listings");

    Ok(Json(ListingsResponse {
        count: listings.len(),
        listings,
    }))
}

/// GET /api/listings/{id} - One listing.
async fn get_listing(
    State(state): State<AppState>,
    Path(id): Path<ListingId>,
) -> Result<Json<ListingView>, (StatusCode, Json<ApiError>)> {
    let session = state.session()?;
    let listing = session.listing(id).map_err(|e| catalog_error(&e))?;
    Ok(Json(ListingView::new(&session, listing)))
}

/// PUT /api/listings/{id}/tier - Select the tier shown for a listing.
async fn set_tier(
    State(state): State<AppState>,
    Path(id): Path<ListingId>,
    Json(request): Json<TierRequest>,
) -> Result<Json<ListingView>, (StatusCode, Json<ApiError>)> {
    let mut session = state.session()?;
    session
        .set_tier_key_for_listing(id, &request.tier)
        .map_err(|e| catalog_error(&e))?;
    let listing = session.listing(id).map_err(|e| catalog_error(&e))?;
    Ok(Json(ListingView::new(&session, listing)))
}

/// POST /api/listings/{id}/book - Confirm a booking.
async fn book_listing(
    State(state): State<AppState>,
    Path(id): Path<ListingId>,
) -> Result<Json<BookingResponse>, (StatusCode, Json<ApiError>)> {
    let mut session = state.session()?;
    session.confirm_booking(id).map_err(|e| catalog_error(&e))?;
    let name = session
        .listing(id)
        .map(|listing| listing.name.clone())
        .map_err(|e| catalog_error(&e))?;

    Ok(Json(BookingResponse {
        id,
        available: false,
        message: format!("Booking confirmed for {name}"),
    }))
}

/// GET /api/stories - Stories with like counts.
async fn list_stories(
    State(state): State<AppState>,
) -> Result<Json<StoriesResponse>, (StatusCode, Json<ApiError>)> {
    let board = state.stories()?;
    let stories = board
        .stories()
        .iter()
        .map(|story| StoryView {
            likes: board.likes(story.id).unwrap_or(story.initial_likes),
            story: story.clone(),
        })
        .collect();
    Ok(Json(StoriesResponse { stories }))
}

/// POST /api/stories - Publish a story for the rest of the session.
async fn create_story(
    State(state): State<AppState>,
    Json(request): Json<CreateStoryRequest>,
) -> Result<(StatusCode, Json<StoryView>), (StatusCode, Json<ApiError>)> {
    let mut board = state.stories()?;
    let story = board
        .submit(request.into())
        .map_err(|e| story_error(&e))?
        .clone();
    Ok((
        StatusCode::CREATED,
        Json(StoryView {
            likes: story.initial_likes,
            story,
        }),
    ))
}

/// POST /api/stories/{id}/like - Like a story.
async fn like_story(
    State(state): State<AppState>,
    Path(id): Path<StoryId>,
) -> Result<Json<LikeResponse>, (StatusCode, Json<ApiError>)> {
    let likes = state.stories()?.like(id).map_err(|e| story_error(&e))?;
    Ok(Json(LikeResponse { id, likes }))
}

// ============================================================================
// Router and Server
// ============================================================================

/// Creates the API router.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - allow all origins; the server is meant to run
    // locally next to the frontend.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Catalog endpoints
        .route("/api/catalog", get(get_catalog))
        .route("/api/filters", get(get_filters))
        .route("/api/listings", get(list_listings))
        .route("/api/listings/{id}", get(get_listing))
        .route("/api/listings/{id}/tier", put(set_tier))
        .route("/api/listings/{id}/book", post(book_listing))
        // Story endpoints
        .route("/api/stories", get(list_stories).post(create_story))
        .route("/api/stories/{id}/like", post(like_story))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Runs the web server.
///
/// # Arguments
///
/// * `catalog` - Catalog fixture to serve; the embedded seed when `None`
/// * `addr` - Socket address to bind to
///
/// # Errors
///
/// Returns an error if the catalog fails to load or the server fails to start.
pub async fn run_server(catalog: Option<&FsPath>, addr: SocketAddr) -> anyhow::Result<()> {
    let store = CatalogStore::load(catalog)?;
    let state = AppState::new(RentalSession::new(store))?;
    let app = create_router(state);

    info!("Starting Vizygo web server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
