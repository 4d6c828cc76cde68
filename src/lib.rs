pub mod shared {
    pub mod application {
        pub mod errors;
    }
    pub mod core {
        pub mod validation;
    }
    pub mod infrastructure {
        pub mod subscriptions;
    }
}

pub mod modules {
    pub mod events {
        pub mod core {
            pub mod access;
            pub mod date_range;
            pub mod event;
            pub mod ports;
        }
        pub mod use_cases {
            pub mod create_event {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod update_event {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod delete_event {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod get_event {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod get_events_by_date_range {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod watch_events {
                pub mod handler;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod event_repository_in_memory;
            }
        }
    }

    pub mod accounts {
        pub mod core {
            pub mod ports;
            pub mod user;
        }
        pub mod use_cases {
            pub mod current_user;
            pub mod user_mirror;
            pub mod sign_in {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod sign_up {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod sign_out {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod request_password_reset {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod auth_provider_in_memory;
                pub mod session_cache;
                pub mod user_directory_in_memory;
            }
        }
    }

    pub mod notifications {
        pub mod core {
            pub mod ports;
        }
        pub mod use_cases {
            pub mod schedule_event_notification {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod cancel_notification {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod register_device_token {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod notification_scheduler_in_memory;
            }
        }
    }
}

pub mod shell;
