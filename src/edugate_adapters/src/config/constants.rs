pub mod env {
    pub const IDENTITY_BASE_URL_ENV_VAR: &str = "EDUGATE__IDENTITY__BASE_URL";
    pub const IDENTITY_API_KEY_ENV_VAR: &str = "EDUGATE__IDENTITY__API_KEY";
}

pub mod prod {
    pub mod identity {
        pub const BASE_URL: &str = "https://identitytoolkit.googleapis.com/";
        pub const TIMEOUT_IN_MILLIS: u64 = 10_000;
    }
}

pub mod test {
    pub mod identity {
        pub const TIMEOUT_IN_MILLIS: u64 = 200;
    }
}
