use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        admin, auth, brand, campaign, category, influencer, invitation, metrics, mou,
        notification, oauth, platform, user,
    },
    error::{config::ConfigError, AppError},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "campaignhub",
        description = "Influencer marketing campaigns: onboarding, workflows, platform connections and metrics"
    ),
    tags(
        (name = "auth", description = "Registration, login and session"),
        (name = "user", description = "Account management for admins"),
        (name = "admin", description = "Admin dashboard and maintenance"),
        (name = "brand", description = "Brand onboarding and review"),
        (name = "influencer", description = "Influencer onboarding, review and directory"),
        (name = "category", description = "Content categories"),
        (name = "platform", description = "Social platforms and the services offered on them"),
        (name = "oauth", description = "Connecting influencer accounts on social platforms"),
        (name = "campaign", description = "Campaign workflow"),
        (name = "invitation", description = "Campaign invitations and deliverables"),
        (name = "mou", description = "Memorandum of understanding approvals"),
        (name = "notification", description = "In-app notifications"),
        (name = "metrics", description = "Influencer and campaign performance")
    )
)]
struct ApiDoc;

/// Builds the API router with OpenAPI documentation served at `/api/docs`.
///
/// # Arguments
/// - `app_url` - Origin allowed to make credentialed cross-origin requests
///
/// # Returns
/// - `Ok(Router)` - Router awaiting the application state and session layer
/// - `Err(ConfigError::InvalidEnvVar)` - `app_url` isn't a valid origin header
pub fn router(app_url: &str) -> Result<Router<AppState>, AppError> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        // Auth
        .routes(routes!(auth::register))
        .routes(routes!(auth::login))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::me))
        .routes(routes!(auth::redirect))
        // Admin
        .routes(routes!(user::get_users))
        .routes(routes!(user::update_user_role))
        .routes(routes!(user::delete_user))
        .routes(routes!(admin::get_overview))
        .routes(routes!(admin::expire_campaigns))
        // Onboarding
        .routes(routes!(
            brand::create_brand_profile,
            brand::get_brand_profile,
            brand::update_brand_profile
        ))
        .routes(routes!(brand::get_brands))
        .routes(routes!(brand::approve_brand))
        .routes(routes!(brand::reject_brand))
        .routes(routes!(
            influencer::create_influencer_profile,
            influencer::get_influencer_profile,
            influencer::update_influencer_profile
        ))
        .routes(routes!(influencer::browse_influencers))
        .routes(routes!(influencer::get_influencer))
        .routes(routes!(influencer::get_influencers_for_review))
        .routes(routes!(influencer::approve_influencer))
        .routes(routes!(influencer::reject_influencer))
        // Catalog
        .routes(routes!(category::get_categories))
        .routes(routes!(category::create_category))
        .routes(routes!(category::update_category, category::delete_category))
        .routes(routes!(platform::get_platforms))
        .routes(routes!(platform::create_platform))
        .routes(routes!(platform::update_platform, platform::delete_platform))
        .routes(routes!(platform::get_services))
        .routes(routes!(platform::create_service))
        .routes(routes!(platform::update_service, platform::delete_service))
        // Platform connections
        .routes(routes!(oauth::connect))
        .routes(routes!(oauth::callback))
        .routes(routes!(oauth::get_accounts))
        .routes(routes!(oauth::disconnect))
        // Campaigns
        .routes(routes!(campaign::create_campaign, campaign::get_campaigns))
        .routes(routes!(campaign::get_campaign, campaign::update_campaign))
        .routes(routes!(campaign::cancel_campaign))
        .routes(routes!(campaign::complete_campaign))
        .routes(routes!(campaign::approve_campaign))
        .routes(routes!(campaign::reject_campaign))
        .routes(routes!(
            invitation::invite_influencers,
            invitation::get_campaign_invitations
        ))
        .routes(routes!(invitation::get_own_invitations))
        .routes(routes!(invitation::respond_invitation))
        .routes(routes!(invitation::deliver_invitation))
        .routes(routes!(mou::get_mou, mou::save_mou))
        .routes(routes!(mou::decide_mou))
        // Notifications
        .routes(routes!(notification::get_notifications))
        .routes(routes!(notification::get_unread_count))
        .routes(routes!(notification::mark_notification_read))
        .routes(routes!(notification::mark_all_notifications_read))
        // Metrics
        .routes(routes!(metrics::get_influencer_metrics))
        .routes(routes!(metrics::get_campaign_metrics))
        .split_for_parts();

    let origin = HeaderValue::from_str(app_url).map_err(|e| ConfigError::InvalidEnvVar {
        name: "APP_URL".to_string(),
        reason: e.to_string(),
    })?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    Ok(router
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", api))
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}
