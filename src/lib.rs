pub mod shared {
    pub mod core {
        pub mod clock;
        pub mod year_month;
    }
}

pub mod modules {
    pub mod attendance {
        pub mod core {
            pub mod check_window;
            pub mod directory;
            pub mod ranking;
            pub mod record;
            pub mod scoring;
            pub mod status;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod check_in {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod user_summary {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod view;
            }
            pub mod study_summary {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod view;
            }
            pub mod monthly_ranking {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod view;
            }
            pub mod global_study_rank {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod view;
            }
            pub mod host_event_view {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod view;
            }
            pub mod event_roster {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod view;
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
            }
            pub mod outbound {
                pub mod attendance_store;
                pub mod attendance_store_in_memory;
                pub mod directories;
                pub mod directories_in_memory;
            }
        }
    }
}

pub mod shell;
