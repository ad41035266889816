table! {
    users (id) {
        id -> Text,
        name -> Text,
        email -> Text,
        password_hash -> Text,
        role -> Text,
        created_at -> BigInt,
    }
}

table! {
    reports (id) {
        id -> Text,
        submitter_id -> Nullable<Text>,
        submitter_email -> Nullable<Text>,
        site_name -> Text,
        address -> Nullable<Text>,
        city -> Text,
        district -> Text,
        lat -> Double,
        lng -> Double,
        obstacle_types -> Text,
        description -> Nullable<Text>,
        reported_at -> BigInt,
        verified -> Bool,
        report_count -> Integer,
    }
}

table! {
    sections (key) {
        key -> Text,
        page -> Text,
        label -> Text,
        visible -> Bool,
        content -> Text,
        updated_at -> BigInt,
    }
}

allow_tables_to_appear_in_same_query!(users, reports, sections);
