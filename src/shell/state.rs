use crate::modules::accounts::adapters::outbound::auth_provider_in_memory::InMemoryAuthProvider;
use crate::modules::accounts::adapters::outbound::user_directory_in_memory::InMemoryUserDirectory;
use crate::modules::accounts::use_cases::request_password_reset::handler::RequestPasswordResetHandler;
use crate::modules::accounts::use_cases::sign_in::handler::SignInHandler;
use crate::modules::accounts::use_cases::sign_out::handler::SignOutHandler;
use crate::modules::accounts::use_cases::sign_up::handler::SignUpHandler;
use crate::modules::events::adapters::outbound::event_repository_in_memory::InMemoryEventRepository;
use crate::modules::events::use_cases::create_event::handler::CreateEventHandler;
use crate::modules::events::use_cases::delete_event::handler::DeleteEventHandler;
use crate::modules::events::use_cases::get_event::handler::GetEventHandler;
use crate::modules::events::use_cases::get_events_by_date_range::handler::GetEventsByDateRangeHandler;
use crate::modules::events::use_cases::update_event::handler::UpdateEventHandler;
use crate::modules::notifications::adapters::outbound::notification_scheduler_in_memory::InMemoryNotificationScheduler;
use crate::modules::notifications::use_cases::cancel_notification::handler::CancelNotificationHandler;
use crate::modules::notifications::use_cases::register_device_token::handler::RegisterDeviceTokenHandler;
use crate::modules::notifications::use_cases::schedule_event_notification::handler::ScheduleEventNotificationHandler;
use std::sync::Arc;

pub type Auth = InMemoryAuthProvider;
pub type Users = InMemoryUserDirectory<Auth>;
pub type Events = InMemoryEventRepository;
pub type Notifications = InMemoryNotificationScheduler;

#[derive(Clone)]
pub struct AppState {
    pub create_event: Arc<CreateEventHandler<Events, Users>>,
    pub update_event: Arc<UpdateEventHandler<Events, Users>>,
    pub delete_event: Arc<DeleteEventHandler<Events, Users>>,
    pub get_event: Arc<GetEventHandler<Events, Users>>,
    pub get_events_by_date_range: Arc<GetEventsByDateRangeHandler<Events, Users>>,
    pub sign_in: Arc<SignInHandler<Auth, Users>>,
    pub sign_up: Arc<SignUpHandler<Auth, Users>>,
    pub sign_out: Arc<SignOutHandler<Auth>>,
    pub request_password_reset: Arc<RequestPasswordResetHandler<Auth>>,
    pub schedule_event_notification: Arc<ScheduleEventNotificationHandler<Notifications, Events>>,
    pub cancel_notification: Arc<CancelNotificationHandler<Notifications>>,
    pub register_device_token: Arc<RegisterDeviceTokenHandler<Notifications, Users>>,
    pub notify_minutes_before: u32,
}

impl AppState {
    pub fn new(
        auth: Arc<Auth>,
        users: Arc<Users>,
        events: Arc<Events>,
        notifications: Arc<Notifications>,
        notify_minutes_before: u32,
    ) -> Self {
        Self {
            create_event: Arc::new(CreateEventHandler::new(events.clone(), users.clone())),
            update_event: Arc::new(UpdateEventHandler::new(events.clone(), users.clone())),
            delete_event: Arc::new(DeleteEventHandler::new(events.clone(), users.clone())),
            get_event: Arc::new(GetEventHandler::new(events.clone(), users.clone())),
            get_events_by_date_range: Arc::new(GetEventsByDateRangeHandler::new(
                events.clone(),
                users.clone(),
            )),
            sign_in: Arc::new(SignInHandler::new(auth.clone(), users.clone())),
            sign_up: Arc::new(SignUpHandler::new(auth.clone(), users.clone())),
            sign_out: Arc::new(SignOutHandler::new(auth.clone())),
            request_password_reset: Arc::new(RequestPasswordResetHandler::new(auth)),
            schedule_event_notification: Arc::new(ScheduleEventNotificationHandler::new(
                notifications.clone(),
                events,
            )),
            cancel_notification: Arc::new(CancelNotificationHandler::new(notifications.clone())),
            register_device_token: Arc::new(RegisterDeviceTokenHandler::new(notifications, users)),
            notify_minutes_before,
        }
    }
}
