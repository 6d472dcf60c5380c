//! Demo data set for the mock store.
//!
//! A freshly started server carries the same records the original demo
//! environment shipped with: one owner, three properties (one vacant),
//! two tenants and their rent, bill and complaint history.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;

use crate::entities::{
    Announcement, Bill, BillStatus, BillType, Complaint, ComplaintCategory, ComplaintStatus,
    Document, PaymentMethod, PaymentStatus, Property, PropertyType, RentPayment, Role, Tenant,
    User,
};

/// Everything needed to populate a store.
#[derive(Debug, Clone)]
pub struct SeedData {
    pub users: Vec<User>,
    pub properties: Vec<Property>,
    pub tenants: Vec<Tenant>,
    pub rent_payments: Vec<RentPayment>,
    pub bills: Vec<Bill>,
    pub complaints: Vec<Complaint>,
    pub announcements: Vec<Announcement>,
    pub documents: Vec<Document>,
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("static seed date")
}

fn timestamp(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 9, 0, 0)
        .single()
        .expect("static seed timestamp")
}

pub fn demo_data() -> SeedData {
    let users = vec![User {
        id: "owner-1".into(),
        name: "Rajesh Kumar".into(),
        email: "rajesh.kumar@example.com".into(),
        role: Role::Owner,
        avatar: "https://i.pravatar.cc/150?u=owner1".into(),
        password: Some("password".into()),
    }];

    let properties = vec![
        Property {
            id: "prop-1".into(),
            owner_id: "owner-1".into(),
            title: "Sunnyvale Apartment".into(),
            address: "123, Sunshine Avenue, Bangalore".into(),
            rent: Decimal::from(25_000),
            property_type: PropertyType::Apartment,
            tenant_id: Some("tenant-1".into()),
            image_url: "https://picsum.photos/seed/prop1/800/600".into(),
            bedrooms: 2,
            bathrooms: 2,
            square_footage: 1200,
        },
        Property {
            id: "prop-2".into(),
            owner_id: "owner-1".into(),
            title: "Greenwood House".into(),
            address: "456, Green Park, Delhi".into(),
            rent: Decimal::from(45_000),
            property_type: PropertyType::House,
            tenant_id: Some("tenant-2".into()),
            image_url: "https://picsum.photos/seed/prop2/800/600".into(),
            bedrooms: 3,
            bathrooms: 3,
            square_footage: 2000,
        },
        Property {
            id: "prop-3".into(),
            owner_id: "owner-1".into(),
            title: "Lakeview Villa".into(),
            address: "789, Lakeview Road, Mumbai".into(),
            rent: Decimal::from(80_000),
            property_type: PropertyType::Villa,
            tenant_id: None,
            image_url: "https://picsum.photos/seed/prop3/800/600".into(),
            bedrooms: 4,
            bathrooms: 5,
            square_footage: 3500,
        },
    ];

    let tenants = vec![
        Tenant {
            id: "tenant-1".into(),
            name: "Priya Sharma".into(),
            email: "priya.sharma@example.com".into(),
            avatar: "https://i.pravatar.cc/150?u=tenant1".into(),
            property_id: "prop-1".into(),
            owner_id: "owner-1".into(),
            password: Some("password".into()),
        },
        Tenant {
            id: "tenant-2".into(),
            name: "Amit Patel".into(),
            email: "amit.patel@example.com".into(),
            avatar: "https://i.pravatar.cc/150?u=tenant2".into(),
            property_id: "prop-2".into(),
            owner_id: "owner-1".into(),
            password: Some("password".into()),
        },
    ];

    let rent_payments = vec![
        RentPayment {
            id: "rent-1".into(),
            property_id: "prop-1".into(),
            tenant_id: "tenant-1".into(),
            month: 7,
            year: 2024,
            amount: Decimal::from(25_000),
            status: PaymentStatus::Paid,
            due_date: date(2024, 7, 5),
            payment_date: Some(date(2024, 7, 3)),
            payment_method: Some(PaymentMethod::Upi),
        },
        RentPayment {
            id: "rent-2".into(),
            property_id: "prop-1".into(),
            tenant_id: "tenant-1".into(),
            month: 8,
            year: 2024,
            amount: Decimal::from(25_000),
            status: PaymentStatus::Pending,
            due_date: date(2024, 8, 5),
            payment_date: None,
            payment_method: None,
        },
        RentPayment {
            id: "rent-3".into(),
            property_id: "prop-2".into(),
            tenant_id: "tenant-2".into(),
            month: 7,
            year: 2024,
            amount: Decimal::from(45_000),
            status: PaymentStatus::Paid,
            due_date: date(2024, 7, 10),
            payment_date: Some(date(2024, 7, 8)),
            payment_method: Some(PaymentMethod::Cash),
        },
        RentPayment {
            id: "rent-4".into(),
            property_id: "prop-2".into(),
            tenant_id: "tenant-2".into(),
            month: 8,
            year: 2024,
            amount: Decimal::from(45_000),
            status: PaymentStatus::Pending,
            due_date: date(2024, 8, 10),
            payment_date: None,
            payment_method: None,
        },
        RentPayment {
            id: "rent-5".into(),
            property_id: "prop-1".into(),
            tenant_id: "tenant-1".into(),
            month: 6,
            year: 2024,
            amount: Decimal::from(25_000),
            status: PaymentStatus::Paid,
            due_date: date(2024, 6, 5),
            payment_date: Some(date(2024, 6, 1)),
            payment_method: Some(PaymentMethod::Upi),
        },
    ];

    let bills = vec![
        Bill {
            id: "bill-1".into(),
            property_id: "prop-1".into(),
            tenant_id: "tenant-1".into(),
            bill_type: BillType::Electricity,
            amount: Decimal::from(1_500),
            status: BillStatus::Paid,
            due_date: date(2024, 7, 15),
            month: 7,
            year: 2024,
        },
        Bill {
            id: "bill-2".into(),
            property_id: "prop-1".into(),
            tenant_id: "tenant-1".into(),
            bill_type: BillType::Water,
            amount: Decimal::from(500),
            status: BillStatus::Pending,
            due_date: date(2024, 8, 15),
            month: 8,
            year: 2024,
        },
    ];

    let complaints = vec![
        Complaint {
            id: "comp-1".into(),
            tenant_id: "tenant-1".into(),
            property_id: "prop-1".into(),
            message: "Leaky faucet in the kitchen.".into(),
            status: ComplaintStatus::Pending,
            date: timestamp(2024, 7, 20),
            category: ComplaintCategory::Maintenance,
        },
        Complaint {
            id: "comp-2".into(),
            tenant_id: "tenant-2".into(),
            property_id: "prop-2".into(),
            message: "Noise complaint about neighbors.".into(),
            status: ComplaintStatus::Resolved,
            date: timestamp(2024, 6, 15),
            category: ComplaintCategory::Civil,
        },
    ];

    let announcements = vec![Announcement {
        id: "anno-1".into(),
        message: "Water supply will be interrupted on Sunday morning for tank cleaning.".into(),
        date: timestamp(2024, 7, 18),
    }];

    let documents = vec![Document {
        id: "doc-1".into(),
        tenant_id: "tenant-1".into(),
        name: "rental-agreement.pdf".into(),
        upload_date: timestamp(2024, 6, 2),
        url: "#".into(),
    }];

    SeedData {
        users,
        properties,
        tenants,
        rent_payments,
        bills,
        complaints,
        announcements,
        documents,
    }
}
