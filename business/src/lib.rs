pub mod application {
    pub mod category {
        pub mod create;
        pub mod get_all;
        pub mod get_by_id;
    }
    pub mod product {
        pub mod create;
        pub mod get_by_id;
        pub mod list;
        pub mod publisher;
        pub mod update;
    }
}

pub mod domain {
    pub mod access;
    pub mod broker;
    pub mod errors;
    pub mod logger;
    pub mod storage;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod category {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod get_all;
            pub mod get_by_id;
        }
    }
    pub mod product {
        pub mod draft;
        pub mod errors;
        pub mod events;
        pub mod model;
        pub mod query;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod get_by_id;
            pub mod list;
            pub mod update;
        }
    }
}

#[cfg(test)]
pub(crate) mod test_utils;
