//! Static MS-ASWBXML token tables
//!
//! One table per code page, 25 pages total. These assignments are part of
//! the wire contract; renumbering any of them breaks interoperability with
//! the server. The tables are immutable data compiled into the binary.

use serde::{Deserialize, Serialize};

/// How a token's content is carried on the wire and surfaced in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenPolicy {
    /// Ordinary element; content is child elements or inline strings.
    Normal,
    /// Content is a length-prefixed opaque byte run, kept verbatim.
    OpaqueRaw,
    /// Content is opaque bytes, but the schema calls the field a string;
    /// the canonical text form is the base64 encoding of the bytes.
    OpaqueBase64,
    /// Content is opaque bytes that may be huge (message bodies,
    /// attachments); callers may store them out-of-line.
    PeelOff,
}

/// One token table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenDef {
    pub code: u8,
    pub name: &'static str,
    pub policy: TokenPolicy,
}

/// One namespace's dictionary.
#[derive(Debug, Clone, Copy)]
pub struct CodePage {
    pub index: u8,
    pub namespace: &'static str,
    pub xmlns: &'static str,
    pub tokens: &'static [TokenDef],
}

const fn t(code: u8, name: &'static str) -> TokenDef {
    TokenDef { code, name, policy: TokenPolicy::Normal }
}

const fn opaque(code: u8, name: &'static str) -> TokenDef {
    TokenDef { code, name, policy: TokenPolicy::OpaqueRaw }
}

const fn b64(code: u8, name: &'static str) -> TokenDef {
    TokenDef { code, name, policy: TokenPolicy::OpaqueBase64 }
}

const fn peel(code: u8, name: &'static str) -> TokenDef {
    TokenDef { code, name, policy: TokenPolicy::PeelOff }
}

impl CodePage {
    pub fn token_by_code(&self, code: u8) -> Option<&'static TokenDef> {
        self.tokens.iter().find(|t| t.code == code)
    }

    pub fn token_by_name(&self, name: &str) -> Option<&'static TokenDef> {
        self.tokens.iter().find(|t| t.name == name)
    }
}

/// Look up a page by index.
pub fn page(index: u8) -> Option<&'static CodePage> {
    CODE_PAGES.get(index as usize)
}

/// Look up a page by its namespace name (e.g. `"FolderHierarchy"`).
pub fn page_for_namespace(namespace: &str) -> Option<&'static CodePage> {
    CODE_PAGES.iter().find(|p| p.namespace == namespace)
}

pub const PAGE_COUNT: u8 = 25;

/// Code page indexes referenced by name elsewhere in the crate.
pub const PAGE_AIRSYNC: u8 = 0;
pub const PAGE_FOLDER_HIERARCHY: u8 = 7;
pub const PAGE_AIRSYNCBASE: u8 = 17;
pub const PAGE_ITEM_OPERATIONS: u8 = 20;

pub static CODE_PAGES: [CodePage; 25] = [
    // Page 0: AirSync
    CodePage {
        index: 0,
        namespace: "AirSync",
        xmlns: "airsync",
        tokens: &[
            t(0x05, "Sync"),
            t(0x06, "Responses"),
            t(0x07, "Add"),
            t(0x08, "Change"),
            t(0x09, "Delete"),
            t(0x0A, "Fetch"),
            t(0x0B, "SyncKey"),
            t(0x0C, "ClientId"),
            t(0x0D, "ServerId"),
            t(0x0E, "Status"),
            t(0x0F, "Collection"),
            t(0x10, "Class"),
            t(0x12, "CollectionId"),
            t(0x13, "GetChanges"),
            t(0x14, "MoreAvailable"),
            t(0x15, "WindowSize"),
            t(0x16, "Commands"),
            t(0x17, "Options"),
            t(0x18, "FilterType"),
            t(0x1B, "Conflict"),
            t(0x1C, "Collections"),
            t(0x1D, "ApplicationData"),
            t(0x1E, "DeletesAsMoves"),
            t(0x20, "Supported"),
            t(0x21, "SoftDelete"),
            t(0x22, "MIMESupport"),
            t(0x23, "MIMETruncation"),
            t(0x24, "Wait"),
            t(0x25, "Limit"),
            t(0x26, "Partial"),
            t(0x27, "ConversationMode"),
            t(0x28, "MaxItems"),
            t(0x29, "HeartbeatInterval"),
        ],
    },
    // Page 1: Contacts
    CodePage {
        index: 1,
        namespace: "Contacts",
        xmlns: "contacts",
        tokens: &[
            t(0x05, "Anniversary"),
            t(0x06, "AssistantName"),
            t(0x07, "AssistantPhoneNumber"),
            t(0x08, "Birthday"),
            t(0x0C, "Business2PhoneNumber"),
            t(0x0D, "BusinessAddressCity"),
            t(0x0E, "BusinessAddressCountry"),
            t(0x0F, "BusinessAddressPostalCode"),
            t(0x10, "BusinessAddressState"),
            t(0x11, "BusinessAddressStreet"),
            t(0x12, "BusinessFaxNumber"),
            t(0x13, "BusinessPhoneNumber"),
            t(0x14, "CarPhoneNumber"),
            t(0x15, "Categories"),
            t(0x16, "Category"),
            t(0x17, "Children"),
            t(0x18, "Child"),
            t(0x19, "CompanyName"),
            t(0x1A, "Department"),
            t(0x1B, "Email1Address"),
            t(0x1C, "Email2Address"),
            t(0x1D, "Email3Address"),
            t(0x1E, "FileAs"),
            t(0x1F, "FirstName"),
            t(0x20, "Home2PhoneNumber"),
            t(0x21, "HomeAddressCity"),
            t(0x22, "HomeAddressCountry"),
            t(0x23, "HomeAddressPostalCode"),
            t(0x24, "HomeAddressState"),
            t(0x25, "HomeAddressStreet"),
            t(0x26, "HomeFaxNumber"),
            t(0x27, "HomePhoneNumber"),
            t(0x28, "JobTitle"),
            t(0x29, "LastName"),
            t(0x2A, "MiddleName"),
            t(0x2B, "MobilePhoneNumber"),
            t(0x2C, "OfficeLocation"),
            t(0x2D, "OtherAddressCity"),
            t(0x2E, "OtherAddressCountry"),
            t(0x2F, "OtherAddressPostalCode"),
            t(0x30, "OtherAddressState"),
            t(0x31, "OtherAddressStreet"),
            t(0x32, "PagerNumber"),
            t(0x33, "RadioPhoneNumber"),
            t(0x34, "Spouse"),
            t(0x35, "Suffix"),
            t(0x36, "Title"),
            t(0x37, "WebPage"),
            t(0x38, "YomiCompanyName"),
            t(0x39, "YomiFirstName"),
            t(0x3A, "YomiLastName"),
            t(0x3C, "Picture"),
            t(0x3D, "Alias"),
            t(0x3E, "WeightedRank"),
        ],
    },
    // Page 2: Email
    CodePage {
        index: 2,
        namespace: "Email",
        xmlns: "email",
        tokens: &[
            t(0x0F, "DateReceived"),
            t(0x11, "DisplayTo"),
            t(0x12, "Importance"),
            t(0x13, "MessageClass"),
            t(0x14, "Subject"),
            t(0x15, "Read"),
            t(0x16, "To"),
            t(0x17, "Cc"),
            t(0x18, "From"),
            t(0x19, "ReplyTo"),
            t(0x1A, "AllDayEvent"),
            t(0x1B, "Categories"),
            t(0x1C, "Category"),
            t(0x1D, "DtStamp"),
            t(0x1E, "EndTime"),
            t(0x1F, "InstanceType"),
            t(0x20, "BusyStatus"),
            t(0x21, "Location"),
            t(0x22, "MeetingRequest"),
            t(0x23, "Organizer"),
            t(0x24, "RecurrenceId"),
            t(0x25, "Reminder"),
            t(0x26, "ResponseRequested"),
            t(0x27, "Recurrences"),
            t(0x28, "Recurrence"),
            t(0x29, "Type"),
            t(0x2A, "Until"),
            t(0x2B, "Occurrences"),
            t(0x2C, "Interval"),
            t(0x2D, "DayOfWeek"),
            t(0x2E, "DayOfMonth"),
            t(0x2F, "WeekOfMonth"),
            t(0x30, "MonthOfYear"),
            t(0x31, "StartTime"),
            t(0x32, "Sensitivity"),
            t(0x33, "TimeZone"),
            t(0x34, "GlobalObjId"),
            t(0x35, "ThreadTopic"),
            t(0x39, "InternetCPID"),
            t(0x3A, "Flag"),
            t(0x3B, "Status"),
            t(0x3C, "ContentClass"),
            t(0x3D, "FlagType"),
            t(0x3E, "CompleteTime"),
            t(0x3F, "DisallowNewTimeProposal"),
        ],
    },
    // Page 3: AirNotify (retired; no tokens)
    CodePage { index: 3, namespace: "AirNotify", xmlns: "", tokens: &[] },
    // Page 4: Calendar
    CodePage {
        index: 4,
        namespace: "Calendar",
        xmlns: "calendar",
        tokens: &[
            t(0x05, "Timezone"),
            t(0x06, "AllDayEvent"),
            t(0x07, "Attendees"),
            t(0x08, "Attendee"),
            t(0x09, "Email"),
            t(0x0A, "Name"),
            t(0x0D, "BusyStatus"),
            t(0x0E, "Categories"),
            t(0x0F, "Category"),
            t(0x11, "DtStamp"),
            t(0x12, "EndTime"),
            t(0x13, "Exception"),
            t(0x14, "Exceptions"),
            t(0x15, "Deleted"),
            t(0x16, "ExceptionStartTime"),
            t(0x17, "Location"),
            t(0x18, "MeetingStatus"),
            t(0x19, "OrganizerEmail"),
            t(0x1A, "OrganizerName"),
            t(0x1B, "Recurrence"),
            t(0x1C, "Type"),
            t(0x1D, "Until"),
            t(0x1E, "Occurrences"),
            t(0x1F, "Interval"),
            t(0x20, "DayOfWeek"),
            t(0x21, "DayOfMonth"),
            t(0x22, "WeekOfMonth"),
            t(0x23, "MonthOfYear"),
            t(0x24, "Reminder"),
            t(0x25, "Sensitivity"),
            t(0x26, "Subject"),
            t(0x27, "StartTime"),
            t(0x28, "UID"),
            t(0x29, "AttendeeStatus"),
            t(0x2A, "AttendeeType"),
            t(0x33, "DisallowNewTimeProposal"),
            t(0x34, "ResponseRequested"),
            t(0x35, "AppointmentReplyTime"),
            t(0x36, "ResponseType"),
            t(0x37, "CalendarType"),
            t(0x38, "IsLeapMonth"),
            t(0x39, "FirstDayOfWeek"),
            t(0x3A, "OnlineMeetingConfLink"),
            t(0x3B, "OnlineMeetingExternalLink"),
        ],
    },
    // Page 5: Move
    CodePage {
        index: 5,
        namespace: "Move",
        xmlns: "move",
        tokens: &[
            t(0x05, "MoveItems"),
            t(0x06, "Move"),
            t(0x07, "SrcMsgId"),
            t(0x08, "SrcFldId"),
            t(0x09, "DstFldId"),
            t(0x0A, "Response"),
            t(0x0B, "Status"),
            t(0x0C, "DstMsgId"),
        ],
    },
    // Page 6: GetItemEstimate
    CodePage {
        index: 6,
        namespace: "GetItemEstimate",
        xmlns: "getitemestimate",
        tokens: &[
            t(0x05, "GetItemEstimate"),
            t(0x06, "Version"),
            t(0x07, "Collections"),
            t(0x08, "Collection"),
            t(0x09, "Class"),
            t(0x0A, "CollectionId"),
            t(0x0B, "DateTime"),
            t(0x0C, "Estimate"),
            t(0x0D, "Response"),
            t(0x0E, "Status"),
        ],
    },
    // Page 7: FolderHierarchy
    CodePage {
        index: 7,
        namespace: "FolderHierarchy",
        xmlns: "folderhierarchy",
        tokens: &[
            t(0x07, "DisplayName"),
            t(0x08, "ServerId"),
            t(0x09, "ParentId"),
            t(0x0A, "Type"),
            t(0x0C, "Status"),
            t(0x0E, "Changes"),
            t(0x0F, "Add"),
            t(0x10, "Delete"),
            t(0x11, "Update"),
            t(0x12, "SyncKey"),
            t(0x13, "FolderCreate"),
            t(0x14, "FolderDelete"),
            t(0x15, "FolderUpdate"),
            t(0x16, "FolderSync"),
            t(0x17, "Count"),
        ],
    },
    // Page 8: MeetingResponse
    CodePage {
        index: 8,
        namespace: "MeetingResponse",
        xmlns: "meetingresponse",
        tokens: &[
            t(0x05, "CalendarId"),
            t(0x06, "CollectionId"),
            t(0x07, "MeetingResponse"),
            t(0x08, "RequestId"),
            t(0x09, "Request"),
            t(0x0A, "Result"),
            t(0x0B, "Status"),
            t(0x0C, "UserResponse"),
            t(0x0E, "InstanceId"),
        ],
    },
    // Page 9: Tasks
    CodePage {
        index: 9,
        namespace: "Tasks",
        xmlns: "tasks",
        tokens: &[
            t(0x08, "Categories"),
            t(0x09, "Category"),
            t(0x0A, "Complete"),
            t(0x0B, "DateCompleted"),
            t(0x0C, "DueDate"),
            t(0x0D, "UtcDueDate"),
            t(0x0E, "Importance"),
            t(0x0F, "Recurrence"),
            t(0x10, "Type"),
            t(0x11, "Start"),
            t(0x12, "Until"),
            t(0x13, "Occurrences"),
            t(0x14, "Interval"),
            t(0x15, "DayOfMonth"),
            t(0x16, "DayOfWeek"),
            t(0x17, "WeekOfMonth"),
            t(0x18, "MonthOfYear"),
            t(0x19, "Regenerate"),
            t(0x1A, "DeadOccur"),
            t(0x1B, "ReminderSet"),
            t(0x1C, "ReminderTime"),
            t(0x1D, "Sensitivity"),
            t(0x1E, "StartDate"),
            t(0x1F, "UtcStartDate"),
            t(0x20, "Subject"),
            t(0x22, "OrdinalDate"),
            t(0x23, "SubOrdinalDate"),
            t(0x24, "CalendarType"),
            t(0x25, "IsLeapMonth"),
            t(0x26, "FirstDayOfWeek"),
        ],
    },
    // Page 10: ResolveRecipients
    CodePage {
        index: 10,
        namespace: "ResolveRecipients",
        xmlns: "resolverecipients",
        tokens: &[
            t(0x05, "ResolveRecipients"),
            t(0x06, "Response"),
            t(0x07, "Status"),
            t(0x08, "Type"),
            t(0x09, "Recipient"),
            t(0x0A, "DisplayName"),
            t(0x0B, "EmailAddress"),
            t(0x0C, "Certificates"),
            t(0x0D, "Certificate"),
            t(0x0E, "MiniCertificate"),
            t(0x0F, "Options"),
            t(0x10, "To"),
            t(0x11, "CertificateRetrieval"),
            t(0x12, "RecipientCount"),
            t(0x13, "MaxCertificates"),
            t(0x14, "MaxAmbiguousRecipients"),
            t(0x15, "CertificateCount"),
            t(0x16, "Availability"),
            t(0x17, "StartTime"),
            t(0x18, "EndTime"),
            t(0x19, "MergedFreeBusy"),
            t(0x1A, "Picture"),
            t(0x1B, "MaxSize"),
            t(0x1C, "Data"),
            t(0x1D, "MaxPictures"),
        ],
    },
    // Page 11: ValidateCert
    CodePage {
        index: 11,
        namespace: "ValidateCert",
        xmlns: "validatecert",
        tokens: &[
            t(0x05, "ValidateCert"),
            t(0x06, "Certificates"),
            t(0x07, "Certificate"),
            t(0x08, "CertificateChain"),
            t(0x09, "CheckCRL"),
            t(0x0A, "Status"),
        ],
    },
    // Page 12: Contacts2
    CodePage {
        index: 12,
        namespace: "Contacts2",
        xmlns: "contacts2",
        tokens: &[
            t(0x05, "CustomerId"),
            t(0x06, "GovernmentId"),
            t(0x07, "IMAddress"),
            t(0x08, "IMAddress2"),
            t(0x09, "IMAddress3"),
            t(0x0A, "ManagerName"),
            t(0x0B, "CompanyMainPhone"),
            t(0x0C, "AccountName"),
            t(0x0D, "NickName"),
            t(0x0E, "MMS"),
        ],
    },
    // Page 13: Ping
    CodePage {
        index: 13,
        namespace: "Ping",
        xmlns: "ping",
        tokens: &[
            t(0x05, "Ping"),
            t(0x06, "AutdState"),
            t(0x07, "Status"),
            t(0x08, "HeartbeatInterval"),
            t(0x09, "Folders"),
            t(0x0A, "Folder"),
            t(0x0B, "Id"),
            t(0x0C, "Class"),
            t(0x0D, "MaxFolders"),
        ],
    },
    // Page 14: Provision
    CodePage {
        index: 14,
        namespace: "Provision",
        xmlns: "provision",
        tokens: &[
            t(0x05, "Provision"),
            t(0x06, "Policies"),
            t(0x07, "Policy"),
            t(0x08, "PolicyType"),
            t(0x09, "PolicyKey"),
            t(0x0A, "Data"),
            t(0x0B, "Status"),
            t(0x0C, "RemoteWipe"),
            t(0x0D, "EASProvisionDoc"),
            t(0x0E, "DevicePasswordEnabled"),
            t(0x0F, "AlphanumericDevicePasswordRequired"),
            t(0x10, "RequireStorageCardEncryption"),
            t(0x11, "PasswordRecoveryEnabled"),
            t(0x13, "AttachmentsEnabled"),
            t(0x14, "MinDevicePasswordLength"),
            t(0x15, "MaxInactivityTimeDeviceLock"),
            t(0x16, "MaxDevicePasswordFailedAttempts"),
            t(0x17, "MaxAttachmentSize"),
            t(0x18, "AllowSimpleDevicePassword"),
            t(0x19, "DevicePasswordExpiration"),
            t(0x1A, "DevicePasswordHistory"),
            t(0x1B, "AllowStorageCard"),
            t(0x1C, "AllowCamera"),
            t(0x1D, "RequireDeviceEncryption"),
            t(0x1E, "AllowUnsignedApplications"),
            t(0x1F, "AllowUnsignedInstallationPackages"),
            t(0x20, "MinDevicePasswordComplexCharacters"),
            t(0x21, "AllowWiFi"),
            t(0x22, "AllowTextMessaging"),
            t(0x23, "AllowPOPIMAPEmail"),
            t(0x24, "AllowBluetooth"),
            t(0x25, "AllowIrDA"),
            t(0x26, "RequireManualSyncWhenRoaming"),
            t(0x27, "AllowDesktopSync"),
            t(0x28, "MaxCalendarAgeFilter"),
            t(0x29, "AllowHTMLEmail"),
            t(0x2A, "MaxEmailAgeFilter"),
            t(0x2B, "MaxEmailBodyTruncationSize"),
            t(0x2C, "MaxEmailHTMLBodyTruncationSize"),
            t(0x2D, "RequireSignedSMIMEMessages"),
            t(0x2E, "RequireEncryptedSMIMEMessages"),
            t(0x2F, "RequireSignedSMIMEAlgorithm"),
            t(0x30, "RequireEncryptionSMIMEAlgorithm"),
            t(0x31, "AllowSMIMEEncryptionAlgorithmNegotiation"),
            t(0x32, "AllowSMIMESoftCerts"),
            t(0x33, "AllowBrowser"),
            t(0x34, "AllowConsumerEmail"),
            t(0x35, "AllowRemoteDesktop"),
            t(0x36, "AllowInternetSharing"),
            t(0x37, "UnapprovedInROMApplicationList"),
            t(0x38, "ApplicationName"),
            t(0x39, "ApprovedApplicationList"),
            t(0x3A, "Hash"),
        ],
    },
    // Page 15: Search
    CodePage {
        index: 15,
        namespace: "Search",
        xmlns: "search",
        tokens: &[
            t(0x05, "Search"),
            t(0x07, "Store"),
            t(0x08, "Name"),
            t(0x09, "Query"),
            t(0x0A, "Options"),
            t(0x0B, "Range"),
            t(0x0C, "Status"),
            t(0x0D, "Response"),
            t(0x0E, "Result"),
            t(0x0F, "Properties"),
            t(0x10, "Total"),
            t(0x11, "EqualTo"),
            t(0x12, "Value"),
            t(0x13, "And"),
            t(0x14, "Or"),
            t(0x15, "FreeText"),
            t(0x17, "DeepTraversal"),
            t(0x18, "LongId"),
            t(0x19, "RebuildResults"),
            t(0x1A, "LessThan"),
            t(0x1B, "GreaterThan"),
            t(0x1E, "UserName"),
            t(0x1F, "Password"),
            b64(0x20, "ConversationId"),
            t(0x21, "Picture"),
            t(0x22, "MaxSize"),
            t(0x23, "MaxPictures"),
        ],
    },
    // Page 16: GAL
    CodePage {
        index: 16,
        namespace: "GAL",
        xmlns: "gal",
        tokens: &[
            t(0x05, "DisplayName"),
            t(0x06, "Phone"),
            t(0x07, "Office"),
            t(0x08, "Title"),
            t(0x09, "Company"),
            t(0x0A, "Alias"),
            t(0x0B, "FirstName"),
            t(0x0C, "LastName"),
            t(0x0D, "HomePhone"),
            t(0x0E, "MobilePhone"),
            t(0x0F, "EmailAddress"),
            t(0x10, "Picture"),
            t(0x11, "Status"),
            // The schema declares Data as a string but servers send the
            // binary picture as opaque. Input-only element, so tag it
            // base64 and let consumers carry the bytes safely as text.
            b64(0x12, "Data"),
        ],
    },
    // Page 17: AirSyncBase
    CodePage {
        index: 17,
        namespace: "AirSyncBase",
        xmlns: "airsyncbase",
        tokens: &[
            t(0x05, "BodyPreference"),
            t(0x06, "Type"),
            t(0x07, "TruncationSize"),
            t(0x08, "AllOrNone"),
            t(0x0A, "Body"),
            peel(0x0B, "Data"),
            t(0x0C, "EstimatedDataSize"),
            t(0x0D, "Truncated"),
            t(0x0E, "Attachments"),
            t(0x0F, "Attachment"),
            t(0x10, "DisplayName"),
            t(0x11, "FileReference"),
            t(0x12, "Method"),
            t(0x13, "ContentId"),
            t(0x14, "ContentLocation"),
            t(0x15, "IsInline"),
            t(0x16, "NativeBodyType"),
            t(0x17, "ContentType"),
            t(0x18, "Preview"),
            t(0x19, "BodyPartPreference"),
            t(0x1A, "BodyPart"),
            t(0x1B, "Status"),
        ],
    },
    // Page 18: Settings
    CodePage {
        index: 18,
        namespace: "Settings",
        xmlns: "settings",
        tokens: &[
            t(0x05, "Settings"),
            t(0x06, "Status"),
            t(0x07, "Get"),
            t(0x08, "Set"),
            t(0x09, "Oof"),
            t(0x0A, "OofState"),
            t(0x0B, "StartTime"),
            t(0x0C, "EndTime"),
            t(0x0D, "OofMessage"),
            t(0x0E, "AppliesToInternal"),
            t(0x0F, "AppliesToExternalKnown"),
            t(0x10, "AppliesToExternalUnknown"),
            t(0x11, "Enabled"),
            t(0x12, "ReplyMessage"),
            t(0x13, "BodyType"),
            t(0x14, "DevicePassword"),
            t(0x15, "Password"),
            t(0x16, "DeviceInformation"),
            t(0x17, "Model"),
            t(0x18, "IMEI"),
            t(0x19, "FriendlyName"),
            t(0x1A, "OS"),
            t(0x1B, "OSLanguage"),
            t(0x1C, "PhoneNumber"),
            t(0x1D, "UserInformation"),
            t(0x1E, "EmailAddresses"),
            t(0x1F, "SMTPAddress"),
            t(0x20, "UserAgent"),
            t(0x21, "EnableOutboundSMS"),
            t(0x22, "MobileOperator"),
            t(0x23, "PrimarySmtpAddress"),
            t(0x24, "Accounts"),
            t(0x25, "Account"),
            t(0x26, "AccountId"),
            t(0x27, "AccountName"),
            t(0x28, "UserDisplayName"),
            t(0x29, "SendDisabled"),
            t(0x2B, "RightsManagementInformation"),
        ],
    },
    // Page 19: DocumentLibrary
    CodePage {
        index: 19,
        namespace: "DocumentLibrary",
        xmlns: "documentlibrary",
        tokens: &[
            t(0x05, "LinkId"),
            t(0x06, "DisplayName"),
            t(0x07, "IsFolder"),
            t(0x08, "CreationDate"),
            t(0x09, "LastModifiedDate"),
            t(0x0A, "IsHidden"),
            t(0x0B, "ContentLength"),
            t(0x0C, "ContentType"),
        ],
    },
    // Page 20: ItemOperations
    CodePage {
        index: 20,
        namespace: "ItemOperations",
        xmlns: "itemoperations",
        tokens: &[
            t(0x05, "ItemOperations"),
            t(0x06, "Fetch"),
            t(0x07, "Store"),
            t(0x08, "Options"),
            t(0x09, "Range"),
            t(0x0A, "Total"),
            t(0x0B, "Properties"),
            peel(0x0C, "Data"),
            t(0x0D, "Status"),
            t(0x0E, "Response"),
            t(0x0F, "Version"),
            t(0x10, "Schema"),
            t(0x11, "Part"),
            t(0x12, "EmptyFolderContents"),
            t(0x13, "DeleteSubFolders"),
            t(0x14, "UserName"),
            t(0x15, "Password"),
            t(0x16, "Move"),
            t(0x17, "DstFldId"),
            b64(0x18, "ConversationId"),
            t(0x19, "MoveAlways"),
        ],
    },
    // Page 21: ComposeMail
    CodePage {
        index: 21,
        namespace: "ComposeMail",
        xmlns: "composemail",
        tokens: &[
            t(0x05, "SendMail"),
            t(0x06, "SmartForward"),
            t(0x07, "SmartReply"),
            t(0x08, "SaveInSentItems"),
            t(0x09, "ReplaceMime"),
            t(0x0B, "Source"),
            t(0x0C, "FolderId"),
            t(0x0D, "ItemId"),
            t(0x0E, "LongId"),
            t(0x0F, "InstanceId"),
            opaque(0x10, "Mime"),
            t(0x11, "ClientId"),
            t(0x12, "Status"),
            t(0x13, "AccountId"),
        ],
    },
    // Page 22: Email2
    CodePage {
        index: 22,
        namespace: "Email2",
        xmlns: "email2",
        tokens: &[
            t(0x05, "UmCallerID"),
            t(0x06, "UmUserNotes"),
            t(0x07, "UmAttDuration"),
            t(0x08, "UmAttOrder"),
            b64(0x09, "ConversationId"),
            b64(0x0A, "ConversationIndex"),
            t(0x0B, "LastVerbExecuted"),
            t(0x0C, "LastVerbExecutionTime"),
            t(0x0D, "ReceivedAsBcc"),
            t(0x0E, "Sender"),
            t(0x0F, "CalendarType"),
            t(0x10, "IsLeapMonth"),
            t(0x11, "AccountId"),
            t(0x12, "FirstDayOfWeek"),
            t(0x13, "MeetingMessageType"),
        ],
    },
    // Page 23: Notes
    CodePage {
        index: 23,
        namespace: "Notes",
        xmlns: "notes",
        tokens: &[
            t(0x05, "Subject"),
            t(0x06, "MessageClass"),
            t(0x07, "LastModifiedDate"),
            t(0x08, "Categories"),
            t(0x09, "Category"),
        ],
    },
    // Page 24: RightsManagement
    CodePage {
        index: 24,
        namespace: "RightsManagement",
        xmlns: "rightsmanagement",
        tokens: &[
            t(0x05, "RightsManagementSupport"),
            t(0x06, "RightsManagementTemplates"),
            t(0x07, "RightsManagementTemplate"),
            t(0x08, "RightsManagementLicense"),
            t(0x09, "EditAllowed"),
            t(0x0A, "ReplyAllowed"),
            t(0x0B, "ReplyAllAllowed"),
            t(0x0C, "ForwardAllowed"),
            t(0x0D, "ModifyRecipientsAllowed"),
            t(0x0E, "ExtractAllowed"),
            t(0x0F, "PrintAllowed"),
            t(0x10, "ExportAllowed"),
            t(0x11, "ProgrammaticAccessAllowed"),
            t(0x12, "Owner"),
            t(0x13, "ContentExpiryDate"),
            t(0x14, "TemplateID"),
            t(0x15, "TemplateName"),
            t(0x16, "TemplateDescription"),
            t(0x17, "ContentOwner"),
            t(0x18, "RemoveRightsManagementDistribution"),
        ],
    },
];
