mod application_command;
pub use application_command::ApplicationCommand;

mod application_command_type;
pub use application_command_type::ApplicationCommandType;

mod application_command_option;
pub use application_command_option::{ApplicationCommandOption, ApplicationCommandOptionType};

mod application_command_option_choice;
pub use application_command_option_choice::ApplicationCommandOptionChoice;

mod interaction;
pub use interaction::{
    ApplicationCommandAutoCompleteInteraction, ApplicationCommandInteraction, Interaction,
    InteractionBase, InteractionType, MessageComponentInteraction,
    MessageComponentInteractionData, ModalInteractionActionRowData, ModalInteractionComponentData,
    ModalInteractionData, ModalSubmitInteraction, PingInteraction,
};

mod application_command_interaction_data;
pub use application_command_interaction_data::{
    ApplicationCommandInteractionData, ApplicationCommandInteractionDataOption,
    ApplicationCommandInteractionDataResolved,
};

mod interaction_response;
pub use interaction_response::{
    ApplicationCommandAutoCompleteResultResponseData, DeferredApplicationCommandResponseData,
    InteractionCallbackMessage, InteractionResponse, InteractionResponseType, ModalResponseData,
};

mod component;
pub use component::{Component, ComponentType};

mod action_row;
pub use action_row::ActionRow;

mod button;
pub use button::{Button, ButtonStyle};

mod select_menu;
pub use select_menu::{SelectDefaultValue, SelectDefaultValueType, SelectMenu, SelectOption};

mod input_text;
pub use input_text::{InputText, TextStyleType};

mod guild_application_command_permissions;
pub use guild_application_command_permissions::{
    ApplicationCommandPermissionType, ApplicationCommandPermissions,
    GuildApplicationCommandPermissions,
};
