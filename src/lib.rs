pub mod shared {
    pub mod core {
        pub mod clock;
    }
    pub mod infrastructure {
        pub mod confirmation;
        pub mod key_value_store;
        pub mod ticker;
    }
}

pub mod modules {
    pub mod time_entries {
        pub mod core {
            pub mod duration_format;
            pub mod editor;
            pub mod errors;
            pub mod summary;
            pub mod time_entry;
            pub mod timer;
        }
        pub mod application {
            pub mod changes;
            pub mod entry_store;
            pub mod project_registry;
            pub mod time_tracker;
        }
        pub mod use_cases {
            pub mod track_time {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod manage_entries {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod manage_projects {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
