//! Tests for portal module
//!
//! These tests verify:
//! - View builders over the bundled fixtures
//! - Portal routes behind the session gate

#[cfg(test)]
mod tests {
    use super::super::handlers::{campaigns, dashboard, deals, talent};
    use super::super::models::{DiscoverQuery, PaymentMethodView, SearchQuery};
    use super::super::Fixtures;
    use crate::app::testing::{body_json, get, login_as, send, send_json, test_app};
    use crate::common::DenyPolicy;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use chrono::NaiveDate;
    use serde_json::json;

    fn fixtures() -> Fixtures {
        Fixtures::bundled().expect("bundled fixtures should parse")
    }

    fn discover(q: Option<&str>, sport: Option<&str>, location: Option<&str>) -> Vec<String> {
        let query = DiscoverQuery {
            q: q.map(str::to_string),
            sport: sport.map(str::to_string),
            location: location.map(str::to_string),
        };
        talent::build_discover_view(&fixtures(), &query)
            .results
            .into_iter()
            .map(|card| card.talent.name)
            .collect()
    }

    // ============================================================================
    // View Builder Tests
    // ============================================================================

    #[test]
    fn test_discover_filters() {
        assert_eq!(discover(None, None, None).len(), 3);
        assert_eq!(discover(None, Some("all"), Some("all")).len(), 3);
        assert_eq!(discover(Some("duke"), None, None), vec!["Marcus Thompson"]);
        assert_eq!(discover(None, Some("music"), None), vec!["Jake Mitchell"]);
        assert_eq!(discover(None, None, Some("CA")), vec!["Sofia Rodriguez"]);
        assert!(discover(Some("hockey"), None, None).is_empty());
    }

    #[test]
    fn test_discover_lists_filter_options() {
        let view = talent::build_discover_view(&fixtures(), &DiscoverQuery::default());
        assert_eq!(view.sports, vec!["Basketball", "Content Creator", "Music"]);
        assert_eq!(view.locations, vec!["NC", "CA", "MA"]);
        assert_eq!(view.results[0].followers_display.instagram, "125.0K");
        assert_eq!(view.results[0].total_followers, 259_000);
    }

    #[test]
    fn test_deals_view_counts_and_search() {
        let fixtures = fixtures();
        let marcus = fixtures.identity_for("talent@example.com", None);
        let view = deals::build_deals_view(&fixtures, &marcus, &SearchQuery::default());
        assert_eq!(view.counts.all, 3);
        assert_eq!(view.counts.pending, 1);
        assert_eq!(view.counts.approved, 1);
        assert_eq!(view.counts.completed, 1);
        assert_eq!(view.counts.rejected, 0);
        assert_eq!(view.completed_earnings, 6800.0);

        let query = SearchQuery {
            q: Some("NIKE".to_string()),
        };
        let view = deals::build_deals_view(&fixtures, &marcus, &query);
        assert_eq!(view.deals.len(), 1);
        assert_eq!(view.deals[0].talent_earnings, 12750.0);
        assert_eq!(view.deals[0].commission, 2250.0);
    }

    #[test]
    fn test_campaigns_view_as_of_date() {
        let today = NaiveDate::from_ymd_opt(2025, 12, 22).unwrap();
        let view = campaigns::build_campaigns_view(&fixtures(), &SearchQuery::default(), today);

        assert_eq!(view.total_budget, 175_000);
        assert_eq!(view.total_reach, 800_000);
        assert_eq!(view.active_campaigns, 2);
        assert_eq!(view.campaigns[0].progress, 50);
        assert_eq!(view.campaigns[0].engagement_rate, 9.0);
        assert_eq!(view.campaigns[1].progress, 100);

        let query = SearchQuery {
            q: Some("wellness".to_string()),
        };
        let view = campaigns::build_campaigns_view(&fixtures(), &query, today);
        assert_eq!(view.campaigns.len(), 1);
        assert_eq!(view.total_budget, 75_000);
    }

    #[test]
    fn test_dashboard_and_earnings_figures() {
        let fixtures = fixtures();

        let marcus = fixtures.identity_for("talent@example.com", None);
        let home = dashboard::build_dashboard_view(&fixtures, &marcus);
        assert_eq!(home.greeting_name, "Marcus");
        assert_eq!(home.total_earnings, 40800.0);
        assert_eq!(home.active_deals, 2);
        assert_eq!(home.recent_deals.len(), 3);

        let earnings =
            dashboard::build_earnings_view(&fixtures, &marcus, PaymentMethodView::default());
        assert_eq!(earnings.total_earnings, 6800.0);
        assert_eq!(earnings.total_commissions, 1200.0);
        assert_eq!(earnings.pending_earnings, 12750.0);
        assert_eq!(earnings.growth_rate, -28.2);
        assert_eq!(earnings.recent_payouts.len(), 1);
        assert_eq!(earnings.payment_method.masked_account, "•••• 1234");
    }

    #[test]
    fn test_analytics_and_admin_views() {
        let fixtures = fixtures();

        let analytics = dashboard::build_analytics_view(&fixtures);
        assert_eq!(analytics.revenue_growth_rate, 21.4);
        assert_eq!(analytics.top_performers[0].revenue_per_deal, 10625.0);

        let admin = dashboard::build_admin_view(&fixtures);
        assert_eq!(admin.total_users, 53);
        assert_eq!(admin.active_deals, 2);
        assert_eq!(admin.campaigns, 2);
        assert_eq!(admin.total_revenue, 48_000);
    }

    // ============================================================================
    // Route Tests
    // ============================================================================

    #[tokio::test]
    async fn test_unknown_talent_is_404_with_home_link() {
        let app = test_app(DenyPolicy::StepBack);
        let cookie = login_as(&app, "brand@example.com").await;

        let response = send(&app, get("/talent/99", Some(&cookie))).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["code"], "NOT_FOUND");
        assert_eq!(body["home"], "/discover");

        let found = send(&app, get("/talent/2", Some(&cookie))).await;
        assert_eq!(found.status(), StatusCode::OK);
        assert_eq!(body_json(found).await["name"], "Sofia Rodriguez");
    }

    #[tokio::test]
    async fn test_deal_detail_carries_analytics_and_live_views() {
        let app = test_app(DenyPolicy::StepBack);
        let cookie = login_as(&app, "talent@example.com").await;

        let response = send(&app, get("/deals/1", Some(&cookie))).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["brand_name"], "Nike");
        assert_eq!(body["engagement_rate"], 5.5);
        assert!(body["live_views"].as_u64().unwrap() >= 50_000);
        assert_eq!(body["collateral"].as_array().unwrap().len(), 4);

        let missing = send(&app, get("/deals/42", Some(&cookie))).await;
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(missing).await["home"], "/dashboard");
    }

    #[tokio::test]
    async fn test_accept_and_reject_pending_deal() {
        let app = test_app(DenyPolicy::StepBack);
        let cookie = login_as(&app, "talent@example.com").await;

        let accepted = send(&app, send_json("POST", "/deals/2/accept", Some(&cookie), json!({}))).await;
        assert_eq!(accepted.status(), StatusCode::OK);
        assert_eq!(body_json(accepted).await["status"], "approved");

        let not_pending = send(&app, send_json("POST", "/deals/1/accept", Some(&cookie), json!({}))).await;
        assert_eq!(not_pending.status(), StatusCode::BAD_REQUEST);

        let no_reason = send(
            &app,
            send_json("POST", "/deals/2/reject", Some(&cookie), json!({ "reason": "  " })),
        )
        .await;
        assert_eq!(no_reason.status(), StatusCode::BAD_REQUEST);

        let rejected = send(
            &app,
            send_json("POST", "/deals/2/reject", Some(&cookie), json!({ "reason": "Schedule conflict" })),
        )
        .await;
        let body = body_json(rejected).await;
        assert_eq!(body["status"], "rejected");
        assert_eq!(body["reject_reason"], "Schedule conflict");

        // Fixture data stays as shipped
        let again = send(&app, get("/deals/2", Some(&cookie))).await;
        assert_eq!(body_json(again).await["status"], "pending");
    }

    #[tokio::test]
    async fn test_profile_defaults_then_round_trips() {
        let app = test_app(DenyPolicy::StepBack);
        let cookie = login_as(&app, "talent@example.com").await;

        let initial = body_json(send(&app, get("/profile", Some(&cookie))).await).await;
        assert_eq!(initial["first_name"], "Marcus");
        assert_eq!(initial["role"], "talent");

        let updated = json!({
            "first_name": "Marc",
            "last_name": "Thompson",
            "email": "marc@example.com",
            "phone": "+1 (555) 000-0000",
            "location": "Durham, NC",
            "bio": "Point guard",
            "allow_ai_likeness": false
        });
        let response = send(&app, send_json("PUT", "/profile", Some(&cookie), updated)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let stored = body_json(send(&app, get("/profile", Some(&cookie))).await).await;
        assert_eq!(stored["first_name"], "Marc");
        assert_eq!(stored["allow_ai_likeness"], false);

        // Profile edits leave the signed-in record alone
        let me = body_json(send(&app, get("/api/me", Some(&cookie))).await).await;
        assert_eq!(me["email"], "talent@example.com");
    }

    #[tokio::test]
    async fn test_profile_update_is_validated() {
        let app = test_app(DenyPolicy::StepBack);
        let cookie = login_as(&app, "admin@example.com").await;

        let invalid = json!({
            "first_name": "",
            "last_name": "Admin",
            "email": "admin",
            "phone": "",
            "location": "",
            "bio": "x".repeat(1001)
        });
        let response = send(&app, send_json("PUT", "/profile", Some(&cookie), invalid)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let message = body_json(response).await["error"].as_str().unwrap().to_string();
        assert!(message.contains("first_name"));
        assert!(message.contains("email"));
        assert!(message.contains("bio"));
    }

    #[tokio::test]
    async fn test_app_user_chooses_talent_and_greeting() {
        let app = test_app(DenyPolicy::StepBack);
        let cookie = login_as(&app, "talent@example.com").await;

        let before = body_json(send(&app, get("/dashboard", Some(&cookie))).await).await;
        assert_eq!(before["greeting_name"], "Marcus");
        assert_eq!(before["active_deals"], 2);

        let profile = json!({
            "first_name": "Sofia",
            "last_name": "Rodriguez",
            "email": "sofia@example.com",
            "phone": "",
            "location": "Los Angeles, CA",
            "bio": "",
            "id": "2",
            "name": "Sofia Rodriguez"
        });
        let saved = send(&app, send_json("PUT", "/profile", Some(&cookie), profile)).await;
        assert_eq!(saved.status(), StatusCode::OK);

        let after = body_json(send(&app, get("/dashboard", Some(&cookie))).await).await;
        assert_eq!(after["greeting_name"], "Sofia");
        assert_eq!(after["active_deals"], 0);

        let deals = body_json(send(&app, get("/deals", Some(&cookie))).await).await;
        assert_eq!(deals["counts"]["all"], 0);

        let earnings = body_json(send(&app, get("/earnings", Some(&cookie))).await).await;
        assert_eq!(earnings["total_earnings"], 0.0);
    }

    #[tokio::test]
    async fn test_app_user_name_alone_keeps_bound_deals() {
        let app = test_app(DenyPolicy::StepBack);
        let cookie = login_as(&app, "talent@example.com").await;

        let profile = json!({
            "first_name": "Marcus",
            "last_name": "Thompson",
            "email": "marcus@example.com",
            "phone": "",
            "location": "",
            "bio": "",
            "name": "Coach Thompson"
        });
        send(&app, send_json("PUT", "/profile", Some(&cookie), profile)).await;

        let home = body_json(send(&app, get("/dashboard", Some(&cookie))).await).await;
        assert_eq!(home["greeting_name"], "Coach");
        assert_eq!(home["active_deals"], 2);
    }

    #[tokio::test]
    async fn test_payment_method_is_stored_masked() {
        let app = test_app(DenyPolicy::StepBack);
        let cookie = login_as(&app, "talent@example.com").await;

        let initial = body_json(send(&app, get("/earnings/payment-method", Some(&cookie))).await).await;
        assert_eq!(initial, json!({ "bank_name": "Bank Account", "masked_account": "•••• 1234" }));

        let incomplete = send(
            &app,
            send_json(
                "PUT",
                "/earnings/payment-method",
                Some(&cookie),
                json!({ "bank_name": "Chase Bank", "account_number": "1234567890" }),
            ),
        )
        .await;
        assert_eq!(incomplete.status(), StatusCode::BAD_REQUEST);
        let message = body_json(incomplete).await["error"].as_str().unwrap().to_string();
        assert!(message.contains("routing_number"), "{}", message);

        let updated = send(
            &app,
            send_json(
                "PUT",
                "/earnings/payment-method",
                Some(&cookie),
                json!({
                    "bank_name": "Chase Bank",
                    "account_number": "1234567890",
                    "routing_number": "021000021"
                }),
            ),
        )
        .await;
        assert_eq!(updated.status(), StatusCode::OK);
        let body = body_json(updated).await;
        assert_eq!(body, json!({ "bank_name": "Chase Bank", "masked_account": "•••• 7890" }));

        let earnings = body_json(send(&app, get("/earnings", Some(&cookie))).await).await;
        assert_eq!(earnings["payment_method"]["masked_account"], "•••• 7890");
        assert!(!earnings.to_string().contains("1234567890"));
    }

    #[tokio::test]
    async fn test_deal_uploads_add_list_and_remove() {
        let app = test_app(DenyPolicy::StepBack);
        let cookie = login_as(&app, "talent@example.com").await;

        let first = send(
            &app,
            send_json(
                "POST",
                "/deals/1/uploads",
                Some(&cookie),
                json!({ "type": "Image", "name": "launch-post.png" }),
            ),
        )
        .await;
        assert_eq!(first.status(), StatusCode::OK);
        assert_eq!(body_json(first).await["uploads"].as_array().unwrap().len(), 1);

        send(
            &app,
            send_json(
                "POST",
                "/deals/1/uploads",
                Some(&cookie),
                json!({ "type": "Document", "name": "report.pdf" }),
            ),
        )
        .await;

        let detail = body_json(send(&app, get("/deals/1", Some(&cookie))).await).await;
        assert_eq!(
            detail["uploads"],
            json!([
                { "type": "Image", "name": "launch-post.png" },
                { "type": "Document", "name": "report.pdf" }
            ])
        );
        let other = body_json(send(&app, get("/deals/2", Some(&cookie))).await).await;
        assert_eq!(other["uploads"], json!([]));

        let removed = send(&app, send_json("DELETE", "/deals/1/uploads/0", Some(&cookie), json!({}))).await;
        assert_eq!(
            body_json(removed).await["uploads"],
            json!([{ "type": "Document", "name": "report.pdf" }])
        );

        let missing = send(&app, send_json("DELETE", "/deals/1/uploads/5", Some(&cookie), json!({}))).await;
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);

        let unnamed = send(
            &app,
            send_json("POST", "/deals/1/uploads", Some(&cookie), json!({ "type": "Video", "name": " " })),
        )
        .await;
        assert_eq!(unnamed.status(), StatusCode::BAD_REQUEST);

        let unknown_kind = send(
            &app,
            send_json("POST", "/deals/1/uploads", Some(&cookie), json!({ "type": "Audio", "name": "a.mp3" })),
        )
        .await;
        assert_eq!(unknown_kind.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_admin_cannot_touch_payment_method() {
        let app = test_app(DenyPolicy::Forbidden);
        let cookie = login_as(&app, "admin@example.com").await;
        let response = send(&app, get("/earnings/payment-method", Some(&cookie))).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_navigation_follows_session_role() {
        let app = test_app(DenyPolicy::StepBack);
        let cookie = login_as(&app, "admin@example.com").await;

        let body = body_json(send(&app, get("/api/nav?path=%2Fprofile", Some(&cookie))).await).await;
        assert_eq!(body["home"], "/admin");
        assert_eq!(body["display_name"], "admin");
        assert_eq!(body["role_label"], "Admin");
        let active: Vec<_> = body["items"]
            .as_array()
            .unwrap()
            .iter()
            .filter(|i| i["active"] == true)
            .map(|i| i["path"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(active, vec!["/profile"]);
    }

    #[tokio::test]
    async fn test_unknown_path_links_home() {
        let app = test_app(DenyPolicy::StepBack);

        let anonymous = send(&app, get("/nowhere", None)).await;
        assert_eq!(anonymous.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(anonymous).await["home"], "/login");

        let cookie = login_as(&app, "brand@example.com").await;
        let signed_in = send(&app, get("/nowhere", Some(&cookie))).await;
        assert_eq!(body_json(signed_in).await["home"], "/discover");
    }

    #[tokio::test]
    async fn test_health_is_open() {
        let app = test_app(DenyPolicy::StepBack);
        let request = Request::builder()
            .uri("/health")
            .header(header::ACCEPT, "application/json")
            .body(Body::empty())
            .unwrap();
        let response = send(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({ "status": "ok" }));
    }
}
