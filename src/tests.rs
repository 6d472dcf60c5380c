mod integration_tests {
    use crate::handlers::announcements::CreateAnnouncementRequest;
    use crate::handlers::bills::CreateBillRequest;
    use crate::handlers::complaints::{CreateComplaintRequest, UpdateComplaintStatusRequest};
    use crate::handlers::documents::UploadDocumentRequest;
    use crate::handlers::properties::{CreatePropertyRequest, UpdatePropertyRequest};
    use crate::handlers::rent_payments::{RequestRentRequest, SubmitPaymentRequest};
    use crate::handlers::tenants::CreateTenantRequest;
    use crate::prediction::RentPredictionRequest;
    use crate::schemas::ApiResponse;
    use crate::test_utils::test_utils::setup_test_app;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use chrono::NaiveDate;
    use model::entities::{ComplaintCategory, PaymentMethod, PropertyType, BillType};
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn test_health_check() {
        // Setup test server
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        // Send GET request to health endpoint
        let response = server.get("/health").await;

        // Verify response
        response.assert_status(StatusCode::OK);
        let body: serde_json::Value = response.json();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["properties"], 3);
        assert_eq!(body["prediction_configured"], false);
    }

    #[tokio::test]
    async fn test_get_properties() {
        // Setup test server
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/v1/properties").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<Vec<serde_json::Value>> = response.json();
        assert!(body.success);
        assert_eq!(body.message, "Properties retrieved successfully");
        assert_eq!(body.data.len(), 3);

        // Rent amounts serialize as strings
        let prop1 = body.data.iter().find(|p| p["id"] == "prop-1").unwrap();
        assert_eq!(prop1["rent"], "25000");
        assert_eq!(prop1["tenant_id"], "tenant-1");
    }

    #[tokio::test]
    async fn test_get_properties_filtered_by_owner() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server
            .get("/api/v1/properties")
            .add_query_param("owner_id", "owner-1")
            .await;
        response.assert_status(StatusCode::OK);
        let body: ApiResponse<Vec<serde_json::Value>> = response.json();
        assert_eq!(body.data.len(), 3);

        let response = server
            .get("/api/v1/properties")
            .add_query_param("owner_id", "owner-unknown")
            .await;
        response.assert_status(StatusCode::OK);
        let body: ApiResponse<Vec<serde_json::Value>> = response.json();
        assert!(body.data.is_empty());
    }

    #[tokio::test]
    async fn test_create_property() {
        // Setup test server
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let create_request = CreatePropertyRequest {
            owner_id: "owner-1".to_string(),
            title: "Hilltop Cottage".to_string(),
            address: "12, Hill Road, Pune".to_string(),
            rent: Decimal::from(30_000),
            property_type: PropertyType::House,
            image_url: None,
            bedrooms: 2,
            bathrooms: 1,
            square_footage: 900,
        };

        let response = server.post("/api/v1/properties").json(&create_request).await;

        response.assert_status(StatusCode::CREATED);
        let body: ApiResponse<serde_json::Value> = response.json();
        assert!(body.success);
        assert_eq!(body.message, "Property created successfully");
        assert_eq!(body.data["title"], "Hilltop Cottage");
        assert_eq!(body.data["rent"], "30000");
        assert!(body.data["tenant_id"].is_null());
        assert!(body.data["id"].as_str().unwrap().starts_with("prop-"));

        // New property shows up in the listing
        let response = server.get("/api/v1/properties").await;
        let body: ApiResponse<Vec<serde_json::Value>> = response.json();
        assert_eq!(body.data.len(), 4);
    }

    #[tokio::test]
    async fn test_create_property_unknown_owner() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let create_request = CreatePropertyRequest {
            owner_id: "owner-unknown".to_string(),
            title: "Nowhere".to_string(),
            address: "1, Nowhere Lane".to_string(),
            rent: Decimal::from(10_000),
            property_type: PropertyType::Apartment,
            image_url: None,
            bedrooms: 1,
            bathrooms: 1,
            square_footage: 400,
        };

        let response = server.post("/api/v1/properties").json(&create_request).await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_update_property() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let update_request = UpdatePropertyRequest {
            title: None,
            address: None,
            rent: Some(Decimal::from(27_500)),
            property_type: None,
            image_url: None,
            bedrooms: None,
            bathrooms: None,
            square_footage: None,
        };

        let response = server
            .put("/api/v1/properties/prop-1")
            .json(&update_request)
            .await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<serde_json::Value> = response.json();
        assert_eq!(body.data["rent"], "27500");
        // Untouched fields keep their values
        assert_eq!(body.data["title"], "Sunnyvale Apartment");
    }

    #[tokio::test]
    async fn test_get_property_not_found() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/v1/properties/prop-999").await;

        response.assert_status(StatusCode::NOT_FOUND);
        let body: serde_json::Value = response.json();
        assert_eq!(body["code"], "NOT_FOUND");
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_delete_vacant_property() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        // prop-3 has no tenant
        let response = server.delete("/api/v1/properties/prop-3").await;
        response.assert_status(StatusCode::OK);

        let response = server.get("/api/v1/properties/prop-3").await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_occupied_property_conflicts() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.delete("/api/v1/properties/prop-1").await;

        response.assert_status(StatusCode::CONFLICT);
        let body: serde_json::Value = response.json();
        assert_eq!(body["code"], "PROPERTY_OCCUPIED");
    }

    #[tokio::test]
    async fn test_create_tenant_occupies_property() {
        // Setup test server
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let create_request = CreateTenantRequest {
            name: "Sneha Reddy".to_string(),
            email: "sneha.reddy@example.com".to_string(),
            property_id: "prop-3".to_string(),
            owner_id: "owner-1".to_string(),
            password: None,
            avatar: None,
        };

        let response = server.post("/api/v1/tenants").json(&create_request).await;

        response.assert_status(StatusCode::CREATED);
        let body: ApiResponse<serde_json::Value> = response.json();
        assert!(body.success);
        assert_eq!(body.message, "Tenant created successfully");
        assert_eq!(body.data["tenant"]["name"], "Sneha Reddy");
        // Server generated a credential since none was supplied
        assert!(body.data["generated_password"].is_string());
        // The raw password never appears on the tenant object
        assert!(body.data["tenant"].get("password").is_none());

        // The property is now occupied
        let tenant_id = body.data["tenant"]["id"].as_str().unwrap().to_string();
        let response = server.get("/api/v1/properties/prop-3").await;
        let body: ApiResponse<serde_json::Value> = response.json();
        assert_eq!(body.data["tenant_id"], tenant_id.as_str());
    }

    #[tokio::test]
    async fn test_create_tenant_on_occupied_property_conflicts() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let create_request = CreateTenantRequest {
            name: "Vikram Singh".to_string(),
            email: "vikram.singh@example.com".to_string(),
            property_id: "prop-1".to_string(),
            owner_id: "owner-1".to_string(),
            password: Some("secret".to_string()),
            avatar: None,
        };

        let response = server.post("/api/v1/tenants").json(&create_request).await;

        response.assert_status(StatusCode::CONFLICT);
        let body: serde_json::Value = response.json();
        assert_eq!(body["code"], "PROPERTY_OCCUPIED");
    }

    #[tokio::test]
    async fn test_create_tenant_invalid_email() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server
            .post("/api/v1/tenants")
            .json(&serde_json::json!({
                "name": "Bad Email",
                "email": "not-an-email",
                "property_id": "prop-3",
                "owner_id": "owner-1"
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_get_tenants() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/v1/tenants").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<Vec<serde_json::Value>> = response.json();
        assert_eq!(body.data.len(), 2);
        assert!(body.data.iter().all(|t| t.get("password").is_none()));
    }

    #[tokio::test]
    async fn test_delete_tenant_vacates_property() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.delete("/api/v1/tenants/tenant-1").await;
        response.assert_status(StatusCode::OK);

        // The tenant is gone and their property is vacant again
        let response = server.get("/api/v1/tenants/tenant-1").await;
        response.assert_status(StatusCode::NOT_FOUND);

        let response = server.get("/api/v1/properties/prop-1").await;
        let body: ApiResponse<serde_json::Value> = response.json();
        assert!(body.data["tenant_id"].is_null());
    }

    #[tokio::test]
    async fn test_get_tenant_property() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/v1/tenants/tenant-2/property").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<serde_json::Value> = response.json();
        assert_eq!(body.data["id"], "prop-2");
    }

    #[tokio::test]
    async fn test_request_rent_defaults() {
        // Setup test server
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let request = RequestRentRequest {
            property_id: "prop-1".to_string(),
            month: 9,
            year: 2024,
        };

        let response = server.post("/api/v1/rent-payments").json(&request).await;

        response.assert_status(StatusCode::CREATED);
        let body: ApiResponse<serde_json::Value> = response.json();
        assert_eq!(body.message, "Rent requested successfully");
        assert_eq!(body.data["status"], "Pending");
        assert_eq!(body.data["tenant_id"], "tenant-1");
        // Amount follows the property rent, due on the 5th of the month
        assert_eq!(body.data["amount"], "25000");
        assert_eq!(body.data["due_date"], "2024-09-05");
        assert!(body.data["payment_method"].is_null());
    }

    #[tokio::test]
    async fn test_request_rent_for_vacant_property_conflicts() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let request = RequestRentRequest {
            property_id: "prop-3".to_string(),
            month: 9,
            year: 2024,
        };

        let response = server.post("/api/v1/rent-payments").json(&request).await;

        response.assert_status(StatusCode::CONFLICT);
        let body: serde_json::Value = response.json();
        assert_eq!(body["code"], "PROPERTY_VACANT");
    }

    #[tokio::test]
    async fn test_request_rent_invalid_month() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server
            .post("/api/v1/rent-payments")
            .json(&serde_json::json!({
                "property_id": "prop-1",
                "month": 13,
                "year": 2024
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_rent_payment_lifecycle() {
        // Setup test server
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        // Tenant pays the pending August rent via UPI
        let pay_request = SubmitPaymentRequest {
            payment_method: PaymentMethod::Upi,
        };
        let response = server
            .post("/api/v1/rent-payments/rent-2/pay")
            .json(&pay_request)
            .await;
        response.assert_status(StatusCode::OK);
        let body: ApiResponse<serde_json::Value> = response.json();
        assert_eq!(body.data["status"], "Processing");
        assert_eq!(body.data["payment_method"], "UPI");
        assert!(body.data["payment_date"].is_null());

        // Owner confirms receipt
        let response = server.post("/api/v1/rent-payments/rent-2/confirm").await;
        response.assert_status(StatusCode::OK);
        let body: ApiResponse<serde_json::Value> = response.json();
        assert_eq!(body.data["status"], "Paid");
        assert!(body.data["payment_date"].is_string());

        // A paid payment cannot be confirmed again
        let response = server.post("/api/v1/rent-payments/rent-2/confirm").await;
        response.assert_status(StatusCode::CONFLICT);
        let body: serde_json::Value = response.json();
        assert_eq!(body["code"], "INVALID_PAYMENT_TRANSITION");
    }

    #[tokio::test]
    async fn test_rejected_payment_can_be_resubmitted() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        // Tenant pays in cash, owner rejects
        let pay_request = SubmitPaymentRequest {
            payment_method: PaymentMethod::Cash,
        };
        let response = server
            .post("/api/v1/rent-payments/rent-4/pay")
            .json(&pay_request)
            .await;
        response.assert_status(StatusCode::OK);

        let response = server.post("/api/v1/rent-payments/rent-4/reject").await;
        response.assert_status(StatusCode::OK);
        let body: ApiResponse<serde_json::Value> = response.json();
        assert_eq!(body.data["status"], "Rejected");

        // The tenant can try again with a different method
        let pay_request = SubmitPaymentRequest {
            payment_method: PaymentMethod::Upi,
        };
        let response = server
            .post("/api/v1/rent-payments/rent-4/pay")
            .json(&pay_request)
            .await;
        response.assert_status(StatusCode::OK);
        let body: ApiResponse<serde_json::Value> = response.json();
        assert_eq!(body.data["status"], "Processing");
        assert_eq!(body.data["payment_method"], "UPI");
    }

    #[tokio::test]
    async fn test_paying_a_paid_rent_conflicts() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let pay_request = SubmitPaymentRequest {
            payment_method: PaymentMethod::Upi,
        };
        // rent-1 is already Paid
        let response = server
            .post("/api/v1/rent-payments/rent-1/pay")
            .json(&pay_request)
            .await;

        response.assert_status(StatusCode::CONFLICT);
        let body: serde_json::Value = response.json();
        assert_eq!(body["code"], "INVALID_PAYMENT_TRANSITION");
    }

    #[tokio::test]
    async fn test_get_rent_payments_filtered() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server
            .get("/api/v1/rent-payments")
            .add_query_param("tenant_id", "tenant-1")
            .await;
        response.assert_status(StatusCode::OK);
        let body: ApiResponse<Vec<serde_json::Value>> = response.json();
        assert_eq!(body.data.len(), 3);

        let response = server
            .get("/api/v1/rent-payments")
            .add_query_param("tenant_id", "tenant-1")
            .add_query_param("status", "Pending")
            .await;
        let body: ApiResponse<Vec<serde_json::Value>> = response.json();
        assert_eq!(body.data.len(), 1);
        assert_eq!(body.data[0]["id"], "rent-2");
    }

    #[tokio::test]
    async fn test_create_bill_for_occupied_property() {
        // Setup test server
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let create_request = CreateBillRequest {
            property_id: "prop-2".to_string(),
            bill_type: BillType::Water,
            amount: Decimal::from(650),
            due_date: NaiveDate::from_ymd_opt(2024, 9, 15).unwrap(),
            month: 9,
            year: 2024,
        };

        let response = server.post("/api/v1/bills").json(&create_request).await;

        response.assert_status(StatusCode::CREATED);
        let body: ApiResponse<serde_json::Value> = response.json();
        // The tenant is derived from the property
        assert_eq!(body.data["tenant_id"], "tenant-2");
        assert_eq!(body.data["status"], "Pending");
        assert_eq!(body.data["amount"], "650");
    }

    #[tokio::test]
    async fn test_create_bill_for_vacant_property_conflicts() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let create_request = CreateBillRequest {
            property_id: "prop-3".to_string(),
            bill_type: BillType::Electricity,
            amount: Decimal::from(900),
            due_date: NaiveDate::from_ymd_opt(2024, 9, 15).unwrap(),
            month: 9,
            year: 2024,
        };

        let response = server.post("/api/v1/bills").json(&create_request).await;

        response.assert_status(StatusCode::CONFLICT);
        let body: serde_json::Value = response.json();
        assert_eq!(body["code"], "PROPERTY_VACANT");
    }

    #[tokio::test]
    async fn test_pay_bill() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        // bill-2 is pending
        let response = server.post("/api/v1/bills/bill-2/pay").await;
        response.assert_status(StatusCode::OK);
        let body: ApiResponse<serde_json::Value> = response.json();
        assert_eq!(body.data["status"], "Paid");

        // Paying it twice is a conflict
        let response = server.post("/api/v1/bills/bill-2/pay").await;
        response.assert_status(StatusCode::CONFLICT);
        let body: serde_json::Value = response.json();
        assert_eq!(body["code"], "BILL_ALREADY_PAID");
    }

    #[tokio::test]
    async fn test_get_bills_for_tenant() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server
            .get("/api/v1/bills")
            .add_query_param("tenant_id", "tenant-1")
            .await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<Vec<serde_json::Value>> = response.json();
        assert_eq!(body.data.len(), 2);
    }

    #[tokio::test]
    async fn test_create_complaint() {
        // Setup test server
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let create_request = CreateComplaintRequest {
            tenant_id: "tenant-2".to_string(),
            message: "Broken window latch in the bedroom.".to_string(),
            category: ComplaintCategory::Maintenance,
        };

        let response = server.post("/api/v1/complaints").json(&create_request).await;

        response.assert_status(StatusCode::CREATED);
        let body: ApiResponse<serde_json::Value> = response.json();
        assert_eq!(body.data["status"], "Pending");
        // The property is resolved from the tenant
        assert_eq!(body.data["property_id"], "prop-2");

        // New complaints list first
        let response = server.get("/api/v1/complaints").await;
        let body: ApiResponse<Vec<serde_json::Value>> = response.json();
        assert_eq!(body.data.len(), 3);
        assert_eq!(body.data[0]["message"], "Broken window latch in the bedroom.");
    }

    #[tokio::test]
    async fn test_complaint_empty_message_rejected() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server
            .post("/api/v1/complaints")
            .json(&serde_json::json!({
                "tenant_id": "tenant-1",
                "message": "",
                "category": "Maintenance"
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_complaint_status() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let update_request = UpdateComplaintStatusRequest {
            status: model::entities::ComplaintStatus::Resolved,
        };

        let response = server
            .put("/api/v1/complaints/comp-1/status")
            .json(&update_request)
            .await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<serde_json::Value> = response.json();
        assert_eq!(body.data["status"], "Resolved");

        // No pending complaints remain
        let response = server
            .get("/api/v1/complaints")
            .add_query_param("status", "Pending")
            .await;
        let body: ApiResponse<Vec<serde_json::Value>> = response.json();
        assert!(body.data.is_empty());
    }

    #[tokio::test]
    async fn test_announcements() {
        // Setup test server
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let create_request = CreateAnnouncementRequest {
            message: "Lift maintenance on Saturday.".to_string(),
        };

        let response = server
            .post("/api/v1/announcements")
            .json(&create_request)
            .await;
        response.assert_status(StatusCode::CREATED);

        // Newest first
        let response = server.get("/api/v1/announcements").await;
        response.assert_status(StatusCode::OK);
        let body: ApiResponse<Vec<serde_json::Value>> = response.json();
        assert_eq!(body.data.len(), 2);
        assert_eq!(body.data[0]["message"], "Lift maintenance on Saturday.");
    }

    #[tokio::test]
    async fn test_announcement_empty_message_rejected() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server
            .post("/api/v1/announcements")
            .json(&serde_json::json!({ "message": "" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_documents() {
        // Setup test server
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let upload_request = UploadDocumentRequest {
            tenant_id: "tenant-1".to_string(),
            name: "id-proof.pdf".to_string(),
            url: None,
        };

        let response = server.post("/api/v1/documents").json(&upload_request).await;
        response.assert_status(StatusCode::CREATED);
        let body: ApiResponse<serde_json::Value> = response.json();
        assert_eq!(body.data["url"], "#");
        let document_id = body.data["id"].as_str().unwrap().to_string();

        // Both the seeded and the new document are listed, newest first
        let response = server
            .get("/api/v1/documents")
            .add_query_param("tenant_id", "tenant-1")
            .await;
        let body: ApiResponse<Vec<serde_json::Value>> = response.json();
        assert_eq!(body.data.len(), 2);
        assert_eq!(body.data[0]["id"], document_id.as_str());

        // Delete and verify it is gone
        let response = server
            .delete(&format!("/api/v1/documents/{}", document_id))
            .await;
        response.assert_status(StatusCode::OK);

        let response = server
            .delete(&format!("/api/v1/documents/{}", document_id))
            .await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_upload_document_unknown_tenant() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let upload_request = UploadDocumentRequest {
            tenant_id: "tenant-999".to_string(),
            name: "orphan.pdf".to_string(),
            url: None,
        };

        let response = server.post("/api/v1/documents").json(&upload_request).await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_owner_dashboard() {
        // Setup test server
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/v1/owners/owner-1/dashboard").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<serde_json::Value> = response.json();
        let data = &body.data;
        assert_eq!(data["total_properties"], 3);
        assert_eq!(data["total_tenants"], 2);
        // rent-2 and rent-4 are pending
        assert_eq!(data["unpaid_rents"], 2);
        // comp-1 is pending
        assert_eq!(data["pending_complaints"], 1);
        assert!(data["awaiting_confirmation"].as_array().unwrap().is_empty());

        // June, July and August 2024 appear in order
        let overview = data["rent_overview"].as_array().unwrap();
        assert_eq!(overview.len(), 3);
        assert_eq!(overview[0]["month"], 6);
        assert_eq!(overview[0]["paid"], "25000");
        assert_eq!(overview[1]["month"], 7);
        assert_eq!(overview[1]["paid"], "70000");
        assert_eq!(overview[2]["month"], 8);
        assert_eq!(overview[2]["pending"], "70000");
    }

    #[tokio::test]
    async fn test_owner_dashboard_shows_submitted_payments() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        // A tenant submits a payment
        let pay_request = SubmitPaymentRequest {
            payment_method: PaymentMethod::Upi,
        };
        server
            .post("/api/v1/rent-payments/rent-2/pay")
            .json(&pay_request)
            .await
            .assert_status(StatusCode::OK);

        let response = server.get("/api/v1/owners/owner-1/dashboard").await;
        let body: ApiResponse<serde_json::Value> = response.json();
        let awaiting = body.data["awaiting_confirmation"].as_array().unwrap();
        assert_eq!(awaiting.len(), 1);
        assert_eq!(awaiting[0]["id"], "rent-2");
    }

    #[tokio::test]
    async fn test_owner_dashboard_unknown_owner() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/v1/owners/owner-999/dashboard").await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_tenant_dashboard() {
        // Setup test server
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/v1/tenants/tenant-1/dashboard").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<serde_json::Value> = response.json();
        let data = &body.data;
        assert_eq!(data["property"]["id"], "prop-1");
        // The earliest payable rent is the pending August one
        assert_eq!(data["next_payment"]["id"], "rent-2");
        // bill-2 has the latest due date
        assert_eq!(data["recent_bill"]["id"], "bill-2");
    }

    #[tokio::test]
    async fn test_rent_prediction_unconfigured() {
        // Setup test server; the test predictor has no API key
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let request = RentPredictionRequest {
            property_type: "Apartment".to_string(),
            location: "Koramangala, Bangalore".to_string(),
            num_bedrooms: 2,
            num_bathrooms: 2,
            square_footage: 1100,
            amenities: "parking, gym".to_string(),
            nearby_amenities: "metro, schools".to_string(),
        };

        let response = server.post("/api/v1/rent-prediction").json(&request).await;

        response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
        let body: serde_json::Value = response.json();
        assert_eq!(body["code"], "PREDICTION_UNAVAILABLE");
    }

    #[tokio::test]
    async fn test_rent_prediction_validation() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server
            .post("/api/v1/rent-prediction")
            .json(&serde_json::json!({
                "property_type": "Apartment",
                "location": "Koramangala, Bangalore",
                "num_bedrooms": 0,
                "num_bathrooms": 2,
                "square_footage": 1100,
                "amenities": "parking",
                "nearby_amenities": "metro"
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
