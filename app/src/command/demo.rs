use biodata_config::Config;

use super::{FilterArgs, OutputFormat, run_pipeline};

/// Two-profile sample text in the source-document layout, useful for
/// trying out filter flags without a document at hand.
const DEMO_TEXT: &str = "\
DOB 08-02-1979 GOTHRAM Kousikasa TOB 03.20 AM POB HYD STAR Arudra 1P
NAME Dharanidhar SURNAME Eleswarapu HT& COMPLEX 5.10 Fair
EDUCATION B Sc JOB BITS Pilani Hyd campus Lab Technician
INCOME 04.80 LPA ADDRESS Block No 6, F-51, TSIIC Colony KAPRA HYD 62
FATHER E V Sastry LATE OCCUPATION CONTACT 9959242663
MOTHER Usha Devi LATE OCCUPATION CONTACT 9885995973
SIBLINGS One brother married SUBSECT V V NO BAR
REQUIREMENTS Minimum education Xth Class

DOB 15-05-1985 GOTHRAM Bharadwaj TOB 02.30 PM POB Mumbai STAR Pushya
NAME Priya SURNAME Sharma HT& COMPLEX 5.4 Fair
EDUCATION M Tech JOB Software Engineer
INCOME 12.50 LPA ADDRESS Flat 203, Green Valley Apartments, Bandra Mumbai
FATHER Rajesh Sharma OCCUPATION Engineer CONTACT 9876543210
MOTHER Sunita Sharma OCCUPATION Teacher CONTACT 9876543211
SIBLINGS Two sisters SUBSECT None NO BAR
REQUIREMENTS MBA preferred";

/// Input for the demo command.
pub struct DemoInput {
    pub debug: bool,
    pub format: OutputFormat,
    pub filters: FilterArgs,
}

/// Strategy for running extraction over the built-in sample text.
#[derive(Debug, Clone, Copy)]
pub struct DemoStrategy;

impl super::CommandStrategy for DemoStrategy {
    type Input = DemoInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::default();
        run_pipeline(DEMO_TEXT, input.debug, input.format, &input.filters, &config)
    }
}
