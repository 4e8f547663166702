// Decline codes as published by each processor.

use crate::domain::decline::ErrorCategory::{self, *};

/// `(code, message, category, retryable)`
pub type DeclineRow = (i32, &'static str, ErrorCategory, bool);

pub(crate) const ADYEN: &[DeclineRow] = &[
    (1, "Refer to card issuer", GeneralDecline, true),
    (3, "Invalid merchant", GeneralDecline, true),
    (4, "Capture card", GeneralDecline, false),
    (5, "Do not honor", GeneralDecline, true),
    (6, "Error", GeneralDecline, true),
    (7, "Pickup card, special condition", GeneralDecline, false),
    (12, "Invalid transaction", GeneralDecline, true),
    (13, "Invalid amount", GeneralDecline, true),
    (14, "Invalid card number", CardNumberMismatch, true),
    (15, "Invalid issuer", GeneralDecline, true),
    (30, "Format error", GeneralDecline, true),
    (41, "Lost card", LostOrStolen, false),
    (43, "Stolen card", LostOrStolen, false),
    (51, "Insufficient funds/over credit limit", InsufficientFunds, true),
    (54, "Expired card", ExpiredCard, true),
    (55, "Invalid PIN", GeneralDecline, true),
    (57, "Transaction not permitted to cardholder", GeneralDecline, true),
    (59, "Suspected fraud", Fraud, true),
    (61, "Exceeds withdrawal amount limit", GeneralDecline, true),
    (62, "Restricted card", GeneralDecline, true),
    (63, "Security violation", GeneralDecline, true),
    (65, "Exceeds withdrawal count limit", GeneralDecline, true),
    (70, "Contact Card Issuer", GeneralDecline, true),
    (75, "Allowable number of PIN tries exceeded", GeneralDecline, true),
    (78, "Blocked, first used", GeneralDecline, false),
    (80, "Credit issuer unavailable", GeneralDecline, true),
    (91, "Issuer unavailable or switch inoperative", GeneralDecline, true),
    (92, "Destination cannot be found for routing", GeneralDecline, true),
    (93, "Transaction cannot be completed; violation of law", GeneralDecline, true),
    (96, "System malfunction", GeneralDecline, true),
];

pub(crate) const BRAINTREE: &[DeclineRow] = &[
    (2000, "Do Not Honor", GeneralDecline, true),
    (2001, "Insufficient Funds", InsufficientFunds, true),
    (2002, "Limit Exceeded", GeneralDecline, true),
    (2003, "Cardholder's Activity Limit Exceeded", GeneralDecline, true),
    (2004, "Expired Card", ExpiredCard, false),
    (2005, "Invalid Credit Card Number", CardNumberMismatch, false),
    (2006, "Invalid Expiration Date", ExpirationDateMismatch, false),
    (2007, "No Account", GeneralDecline, false),
    (2008, "Card Account Length Error", GeneralDecline, false),
    (2009, "No Such Issuer", GeneralDecline, true),
    (2010, "Card Issuer Declined CVV", CvvMismatch, false),
    (2011, "Voice Authorization Required", GeneralDecline, false),
    (2012, "Processor Declined Possible Lost Card", LostOrStolen, false),
    (2013, "Processor Declined - Possible Stolen Card", LostOrStolen, false),
    (2014, "Processor Declined - Fraud Suspected", Fraud, false),
    (2015, "Transaction Not Allowed", GeneralDecline, false),
    (2016, "Duplicate Transaction", GeneralDecline, true),
    (2017, "Cardholder Stopped Billing", GeneralDecline, false),
    (2018, "Cardholder Stopped All Billing", GeneralDecline, false),
    (2019, "Invalid Transaction", GeneralDecline, false),
    (2020, "Violation", GeneralDecline, false),
    (2021, "Security Violation", GeneralDecline, true),
    (2022, "Declined - Updated Cardholder Available", GeneralDecline, false),
    (2023, "Processor Does Not Support This Feature", GeneralDecline, false),
    (2024, "Card Type Not Enabled", GeneralDecline, false),
    (2025, "Set Up Error - Merchant", GeneralDecline, true),
    (2026, "Invalid Merchant ID", GeneralDecline, true),
    (2027, "Set Up Error - Amount", GeneralDecline, false),
    (2028, "Set Up Error - Hierarchy", GeneralDecline, false),
    (2029, "Set Up Error - Card", GeneralDecline, false),
    (2030, "Set Up Error - Terminal", GeneralDecline, false),
    (2031, "Encryption Error", GeneralDecline, false),
    (2032, "Surcharge Not Permitted", GeneralDecline, false),
    (2033, "Inconsistent Data", GeneralDecline, true),
    (2034, "No Action Taken", GeneralDecline, true),
    (2035, "Partial Approval For Amount In Group III Version", GeneralDecline, true),
    (2036, "Authorization could not be found to reverse", GeneralDecline, false),
    (2037, "Already Reversed", GeneralDecline, false),
    (2038, "Processor Declined", GeneralDecline, true),
    (2039, "Invalid Authorization Code", GeneralDecline, false),
    (2040, "Invalid Store", GeneralDecline, true),
    (2041, "Declined - Call For Approval", GeneralDecline, false),
    (2042, "Invalid Client ID", GeneralDecline, true),
    (2043, "Error - Do Not Retry, Call Issuer", GeneralDecline, false),
    (2044, "Declined - Call Issuer", GeneralDecline, false),
    (2045, "Invalid Merchant Number", GeneralDecline, false),
    (2046, "Declined", GeneralDecline, true),
    (2047, "Call Issuer. Pick Up Card", GeneralDecline, false),
    (2048, "Invalid Amount", GeneralDecline, true),
    (2049, "Invalid SKU Number", GeneralDecline, false),
    (2050, "Invalid Credit Plan", GeneralDecline, true),
    (2051, "Credit Card Number does not match method of payment", GeneralDecline, false),
    (2053, "Card reported as lost or stolen", LostOrStolen, false),
    (2054, "Reversal amount does not match authorization amount", GeneralDecline, true),
    (2055, "Invalid Transaction Division Number", GeneralDecline, false),
    (2056, "Transaction amount exceeds the transaction division limit", GeneralDecline, false),
    (2057, "Issuer or Cardholder has put a restriction on the card", GeneralDecline, true),
    (2058, "Merchant not MasterCard SecureCode enabled", GeneralDecline, false),
    (2059, "Address Verification Failed", AddressMismatch, false),
    (2060, "Address Verification and Card Security Code Failed", AddressMismatch, false),
    (2061, "Invalid Transaction Data", GeneralDecline, false),
    (2062, "Invalid Tax Amount", GeneralDecline, true),
    (2063, "PayPal Business Account preference resulted in the transaction failing", GeneralDecline, false),
    (2064, "Invalid Currency Code", GeneralDecline, false),
    (2065, "Refund Time Limit Exceeded", GeneralDecline, false),
    (2066, "PayPal Business Account Restricted", GeneralDecline, false),
    (2067, "Authorization Expired", GeneralDecline, false),
    (2068, "PayPal Business Account Locked or Closed", GeneralDecline, false),
    (2069, "PayPal Blocking Duplicate Order IDs", GeneralDecline, false),
    (2070, "PayPal Buyer Revoked Future Payment Authorization", GeneralDecline, false),
    (2071, "PayPal Payee Account Invalid Or Does Not Have a Confirmed Email", GeneralDecline, false),
    (2072, "PayPal Payee Email Incorrectly Formatted", GeneralDecline, false),
    (2073, "PayPal Validation Error", GeneralDecline, false),
    (2074, "Funding Instrument In The PayPal Account Was Declined By The Processor Or Bank, Or It Can't Be Used For This Payment", GeneralDecline, false),
    (2075, "Payer Account Is Locked Or Closed", GeneralDecline, false),
    (2076, "Payer Cannot Pay For This Transaction With PayPal", GeneralDecline, false),
    (2077, "Transaction Refused Due To PayPal Risk Model", GeneralDecline, false),
    (2079, "PayPal Merchant Account Configuration Error", GeneralDecline, false),
    (2081, "PayPal pending payments are not supported", GeneralDecline, false),
    (2082, "PayPal Domestic Transaction Required", GeneralDecline, false),
    (2083, "PayPal Phone Number Required", GeneralDecline, false),
    (2084, "PayPal Tax Info Required", GeneralDecline, false),
    (2085, "PayPal Payee Blocked Transaction", GeneralDecline, false),
    (2086, "PayPal Transaction Limit Exceeded", GeneralDecline, false),
    (2087, "PayPal reference transactions not enabled for your account", GeneralDecline, false),
    (2088, "Currency not enabled for your PayPal seller account", GeneralDecline, false),
    (2089, "PayPal payee email permission denied for this request", GeneralDecline, false),
    (2090, "PayPal account not configured to refund more than settled amount", GeneralDecline, false),
    (2091, "Currency of this transaction must match currency of your PayPal account", GeneralDecline, false),
    (2092, "Processor Declined", GeneralDecline, true),
    (2093, "Processor Declined", GeneralDecline, true),
    (2094, "Processor Declined", GeneralDecline, true),
    (2095, "Processor Declined", GeneralDecline, true),
    (2096, "Processor Declined", GeneralDecline, true),
    (2097, "Processor Declined", GeneralDecline, true),
    (2098, "Processor Declined", GeneralDecline, true),
    (2099, "Processor Declined", GeneralDecline, true),
    (3000, "Processor Network Unavailable - Try Again", GeneralDecline, true),
];

pub(crate) const PAYMENTECH: &[DeclineRow] = &[
    (109, "Previously Processed Transaction", GeneralDecline, true),
    (201, "Invalid CC Number", CardNumberMismatch, false),
    (202, "Bad Amount", GeneralDecline, true),
    (203, "Zero Amount", GeneralDecline, true),
    (204, "Other Error", GeneralDecline, true),
    (205, "Bad Total Authorization Amount", GeneralDecline, true),
    (225, "Invalid Value in Message", GeneralDecline, true),
    (226, "Invalid Data Type", GeneralDecline, true),
    (227, "Missing Companion Data", GeneralDecline, true),
    (228, "Invalid Record Sequence", GeneralDecline, true),
    (229, "Percents Not Total 100", GeneralDecline, true),
    (230, "Payments Not Total Order", GeneralDecline, true),
    (231, "Invalid Merchant Number", GeneralDecline, true),
    (232, "Bad Order Number", GeneralDecline, true),
    (233, "Does not Match MOP", GeneralDecline, true),
    (234, "Duplicated Order #", GeneralDecline, true),
    (235, "FPO Locked", GeneralDecline, true),
    (236, "Auth Recycle Host down", GeneralDecline, true),
    (237, "FPO Not Allowed", GeneralDecline, false),
    (238, "Invalid Currency", GeneralDecline, true),
    (239, "Invalid MOP for Division", GeneralDecline, false),
    (240, "Auth Amount Wrong", GeneralDecline, true),
    (241, "Illegal Action", GeneralDecline, true),
    (243, "Invalid Purch. Level 3", GeneralDecline, true),
    (245, "Invalid Secure Payment Data", GeneralDecline, true),
    (246, "Merchant not MC SecureCode Enabled", GeneralDecline, false),
    (248, "Blanks not Passed in Reserved Field", GeneralDecline, true),
    (249, "Invalid MCC Sent", GeneralDecline, true),
    (251, "Invalid Start Date", GeneralDecline, true),
    (252, "Invalid Issue Number", GeneralDecline, true),
    (253, "Invalid Transaction Type", GeneralDecline, true),
    (257, "Customer Service Phone Number required on Transaction Types 1 (MO/TO) and 2 (Recurring). MC Only", GeneralDecline, true),
    (258, "Not Authorized to send record", GeneralDecline, true),
    (260, "Soft AVS", AddressMismatch, true),
    (301, "Issuer Unavailable", GeneralDecline, true),
    (302, "Credit Floor", InsufficientFunds, true),
    (303, "Processor Decline", GeneralDecline, false),
    (304, "Not on File", GeneralDecline, true),
    (332, "Floor Low Fraud", GeneralDecline, false),
    (333, "Floor Medium Fraud", GeneralDecline, false),
    (334, "Floor High fraud", GeneralDecline, false),
    (335, "Floor Unavailable Fraud", GeneralDecline, true),
    (401, "Call/Refer to Card Issuer", GeneralDecline, false),
    (402, "Default Call", GeneralDecline, false),
    (432, "Call Low Fraud", GeneralDecline, false),
    (433, "Call Medium Fraud", GeneralDecline, false),
    (434, "Call High Fraud", GeneralDecline, false),
    (435, "Call Unavailable Fraud", GeneralDecline, false),
    (442, "Default Call Low Fraud", GeneralDecline, false),
    (443, "Default Call Medium Fraud", GeneralDecline, false),
    (444, "Default Call High Fraud", GeneralDecline, false),
    (445, "Default Call Unavailable Fraud", GeneralDecline, false),
    (501, "Pickup", GeneralDecline, false),
    (502, "Lost/Stolen", GeneralDecline, false),
    (503, "Fraud", GeneralDecline, false),
    (504, "Bad Debt", GeneralDecline, false),
    (505, "On Negative File", GeneralDecline, false),
    (506, "Invalid Issuer", GeneralDecline, true),
    (507, "Invalid Response Code", GeneralDecline, true),
    (508, "Excessive PIN Try", GeneralDecline, false),
    (509, "Over Limit", GeneralDecline, false),
    (510, "Over Freq Limit", GeneralDecline, false),
    (511, "Over Sav Limit", GeneralDecline, false),
    (512, "Over Sav Freq", GeneralDecline, false),
    (514, "Over Credit Freq", GeneralDecline, false),
    (515, "Invalid For Credit", GeneralDecline, true),
    (516, "Invalid For Debit", GeneralDecline, true),
    (517, "Rev Exceed Withdrawal", GeneralDecline, false),
    (518, "One Purchasing Limit", GeneralDecline, false),
    (519, "On Negative File", GeneralDecline, false),
    (520, "Changed Field", GeneralDecline, true),
    (521, "Insufficient Funds", GeneralDecline, true),
    (522, "Card is Expired", GeneralDecline, false),
    (523, "Encrypted Data Bad", GeneralDecline, true),
    (524, "Altered Data", GeneralDecline, true),
    (530, "Do Not Honor", GeneralDecline, false),
    (531, "CVV2/CVC2 Failure", GeneralDecline, false),
    (532, "Do Not Honor Low Fraud", GeneralDecline, false),
    (533, "Do Not Honor Medium Fraud", GeneralDecline, false),
    (534, "Do Not Honor High fraud", GeneralDecline, false),
    (535, "Do Not Honor Unavailable Fraud", GeneralDecline, false),
    (540, "Under 18 Years Old", GeneralDecline, false),
    (541, "Possible Compromise", GeneralDecline, false),
    (542, "Bill To Not Equal To Ship To", GeneralDecline, false),
    (543, "Invalid Pre-approval Number", GeneralDecline, false),
    (544, "Invalid Email Address", GeneralDecline, false),
    (545, "PA ITA Number Inactive", GeneralDecline, false),
    (546, "Blocked Account", GeneralDecline, false),
    (547, "Address Verification Failed", GeneralDecline, false),
    (548, "Not on Credit Bureau", GeneralDecline, false),
    (549, "Previously Declined", GeneralDecline, false),
    (550, "Closed Account, New Account Closed", GeneralDecline, false),
    (551, "Duplicate Transaction", GeneralDecline, false),
    (560, "Re-Authorization", GeneralDecline, false),
    (561, "Re-Authorization – No Match", GeneralDecline, false),
    (563, "Re-Authorization – Timeframes Exceeded", GeneralDecline, false),
    (570, "Stop Deposit Order", GeneralDecline, false),
    (571, "Revocation of Authorization", GeneralDecline, false),
    (580, "Account Previously Activated", GeneralDecline, false),
    (581, "Unable to Void Transaction", GeneralDecline, true),
    (582, "Block Activation Failed – Card Range Not Set Up for MOD 10", GeneralDecline, true),
    (583, "Block Activation Failed – E-mail or Fulfillment Flags were set to Y", GeneralDecline, true),
    (584, "Declined – Issuance Does Not Meet Minimum Amount", GeneralDecline, false),
    (585, "Declined – No Original Auth Found", GeneralDecline, false),
    (586, "Declined – Outstanding Auth, Funds On Hold", GeneralDecline, false),
    (587, "Activation Amount Incorrect", GeneralDecline, true),
    (588, "Block Activation Failed – Account Not Correct Or Block Size Not Correct", GeneralDecline, true),
    (589, "Mag Stripe CVD Value Failed", GeneralDecline, true),
    (590, "Max Redemption Limit Met", GeneralDecline, true),
    (591, "Invalid Credit Card Number", GeneralDecline, false),
    (592, "Bad Amount", GeneralDecline, true),
    (594, "Other Error", GeneralDecline, false),
    (595, "New Card Issued", GeneralDecline, false),
    (596, "Issuer has Flagged Account as Suspected Fraud. (Discover Only)", GeneralDecline, false),
    (601, "Invalid Prefix", GeneralDecline, true),
    (602, "Invalid Institution Code", GeneralDecline, true),
    (603, "Invalid Institution", GeneralDecline, true),
    (604, "Invalid Cardholder", GeneralDecline, true),
    (605, "Invalid Expiration Date", GeneralDecline, true),
    (606, "Invalid Transaction Type", GeneralDecline, false),
    (607, "Invalid Amount", GeneralDecline, true),
    (610, "BIN Block", GeneralDecline, true),
    (750, "Invalid Transit Routing Number", GeneralDecline, true),
    (751, "Unknown Transit Routing Number", GeneralDecline, true),
    (752, "Missing Name", GeneralDecline, true),
    (753, "Invalid Account Type", GeneralDecline, true),
    (754, "Account Closed", GeneralDecline, false),
    (755, "No Account/Unable To Locate", GeneralDecline, true),
    (756, "Account Holder Deceased", GeneralDecline, false),
    (757, "Beneficiary Deceased", GeneralDecline, false),
    (758, "Account Frozen", GeneralDecline, false),
    (759, "Customer Opt Out", GeneralDecline, false),
    (760, "ACH Non-Participant", GeneralDecline, false),
    (761, "No Pre-note", GeneralDecline, true),
    (762, "No Address", GeneralDecline, true),
    (763, "Invalid Account Number", GeneralDecline, true),
    (764, "Authorization Revoked by Consumer", GeneralDecline, true),
    (765, "Customer Advises Not Authorized", GeneralDecline, false),
    (766, "Invalid CECP Action Code", GeneralDecline, false),
    (767, "Invalid Account Format", GeneralDecline, true),
    (768, "Bad Account Number Data", GeneralDecline, true),
    (769, "Account Non-Convertible", GeneralDecline, true),
    (801, "No Capture", GeneralDecline, true),
    (802, "Positive ID", GeneralDecline, false),
    (803, "No Credit Function", GeneralDecline, true),
    (804, "No Debit Function", GeneralDecline, true),
    (805, "Rev Exceed Withdrawal", GeneralDecline, false),
    (806, "Restraint", GeneralDecline, false),
    (807, "Changed Field", GeneralDecline, true),
    (808, "Terminal Not Owned", GeneralDecline, true),
    (809, "Invalid Time", GeneralDecline, true),
    (810, "Invalid Date", GeneralDecline, true),
    (811, "Invalid Amex CID", GeneralDecline, false),
    (812, "Invalid Terminal Number", GeneralDecline, true),
    (813, "Invalid PIN", GeneralDecline, false),
    (814, "No Manual Key", GeneralDecline, true),
    (815, "Not Signed In", GeneralDecline, true),
    (816, "Excessive PIN Try", GeneralDecline, false),
    (817, "No DDA", GeneralDecline, true),
    (818, "No SAV", GeneralDecline, true),
    (819, "Excess DDA", GeneralDecline, false),
    (820, "Excess DDA FREQ", GeneralDecline, false),
    (821, "Excess SAV", GeneralDecline, false),
    (822, "Excess SAV FREQ", GeneralDecline, false),
    (823, "Excess Card", GeneralDecline, false),
    (824, "Excess Card Freq", GeneralDecline, false),
    (825, "No Account", GeneralDecline, false),
    (826, "Reserved Future", GeneralDecline, true),
    (827, "Reserved Closing", GeneralDecline, true),
    (828, "Dormant", GeneralDecline, false),
    (829, "NSF", GeneralDecline, true),
    (830, "Future RD Six", GeneralDecline, true),
    (831, "Future RD Seven", GeneralDecline, true),
    (832, "Transaction Code Conflict", GeneralDecline, true),
    (833, "Invalid Merchant", GeneralDecline, true),
    (834, "Method of Payment is Invalid for Merchant", GeneralDecline, true),
    (901, "In Progress", GeneralDecline, true),
    (902, "Process Unavailable", GeneralDecline, true),
    (903, "Invalid Expiration", GeneralDecline, true),
    (904, "Invalid Effective", GeneralDecline, true),
    (905, "Stand In Rules", GeneralDecline, false),
];
